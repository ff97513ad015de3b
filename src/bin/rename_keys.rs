//! Re-keys a function-id mapping from internal names to published names.

use anyhow::{Result, anyhow, bail};
use apic_catalog::catalog::writer::{to_json_pretty, write_atomically};
use apic_catalog::cli::{next_path, utf8_arg};
use apic_catalog::rename::{load_rename_table, rename_keys};
use apic_catalog::{FunctionIdMapping, logging};
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

    let rules = load_rename_table(&args.table)?;
    let source = FunctionIdMapping::load(&args.input)?;
    let outcome = rename_keys(&source, &rules);

    for rule in &outcome.missing {
        eprintln!(
            "Warning: '{}' not found in {} (for '{}')",
            rule.mapped,
            args.input.display(),
            rule.original
        );
    }

    let json = to_json_pretty(&outcome.mapping, 4)?;
    write_atomically(&args.output, &json)?;

    println!(
        "Wrote {} keys to {}",
        outcome.mapping.len(),
        args.output.display()
    );
    if !outcome.unused_keys.is_empty() {
        println!(
            "{} source keys were not referenced by the table and were dropped",
            outcome.unused_keys.len()
        );
    }
    Ok(())
}

struct CliArgs {
    table: PathBuf,
    input: PathBuf,
    output: PathBuf,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut table: Option<PathBuf> = None;
        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            match utf8_arg(arg)?.as_str() {
                "--table" => table = Some(next_path(&mut args, "--table")?),
                "--input" => input = Some(next_path(&mut args, "--input")?),
                "--output" => output = Some(next_path(&mut args, "--output")?),
                "--help" | "-h" => {
                    println!("Usage: rename-keys --table FILE --input FILE --output FILE");
                    std::process::exit(0);
                }
                other => bail!("unknown argument: {other}"),
            }
        }

        Ok(Self {
            table: table.ok_or_else(|| anyhow!("missing required --table"))?,
            input: input.ok_or_else(|| anyhow!("missing required --input"))?,
            output: output.ok_or_else(|| anyhow!("missing required --output"))?,
        })
    }
}
