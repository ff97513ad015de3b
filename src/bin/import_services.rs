//! Converts the pipe-delimited `services.txt` into registry JSON.
//!
//! Output uses the same record shape as `services.json`, so the result can be
//! reviewed and merged into the registry.

use anyhow::{Result, bail};
use apic_catalog::catalog::writer::{to_json_pretty, write_atomically};
use apic_catalog::cli::{next_path, utf8_arg};
use apic_catalog::importer::parse_services_file;
use apic_catalog::logging;
use std::env;
use std::path::PathBuf;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;

    if !args.input.is_file() {
        bail!("input file not found: {}", args.input.display());
    }
    let records = parse_services_file(&args.input)?;
    let json = to_json_pretty(&records, 2)?;

    if !args.quiet {
        println!("{}", String::from_utf8_lossy(&json));
    }
    write_atomically(&args.output, &json)?;

    println!(
        "Imported {} services into {}",
        records.len(),
        args.output.display()
    );
    Ok(())
}

struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    quiet: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut input = PathBuf::from("services.txt");
        let mut output = PathBuf::from("services_output.json");
        let mut quiet = false;

        while let Some(arg) = args.next() {
            match utf8_arg(arg)?.as_str() {
                "--input" => input = next_path(&mut args, "--input")?,
                "--output" => output = next_path(&mut args, "--output")?,
                "--quiet" | "-q" => quiet = true,
                "--help" | "-h" => {
                    println!("Usage: import-services [--input FILE] [--output FILE] [--quiet]");
                    std::process::exit(0);
                }
                other => bail!("unknown argument: {other}"),
            }
        }

        Ok(Self {
            input,
            output,
            quiet,
        })
    }
}
