//! Prints a JSON Schema file as YAML ready to paste into an API definition.
//!
//! Usage: `schema-to-yaml <schema_file> [--indent N]` (default indent 6, the
//! depth of `definitions.<name>.` in the API template).

use anyhow::{Context, Result, bail};
use apic_catalog::cli::{next_value, utf8_arg};
use apic_catalog::logging;
use apic_catalog::yaml_schema::render_schema_yaml;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_INDENT: usize = 6;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args_os().skip(1);
    let mut file: Option<PathBuf> = None;
    let mut indent = DEFAULT_INDENT;

    while let Some(arg) = args.next() {
        let arg = utf8_arg(arg)?;
        match arg.as_str() {
            "--indent" => {
                let raw = next_value(&mut args, "--indent")?;
                indent = raw
                    .parse()
                    .with_context(|| format!("invalid --indent value: {raw}"))?;
            }
            "--help" | "-h" => {
                println!("Usage: schema-to-yaml <schema_file> [--indent N]");
                std::process::exit(0);
            }
            other if file.is_none() && !other.starts_with("--") => {
                file = Some(PathBuf::from(other));
            }
            other => bail!("unexpected argument: {other}"),
        }
    }

    let Some(file) = file else {
        bail!("Usage: schema-to-yaml <schema_file> [--indent N]");
    };
    let contents =
        fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
    let schema: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {}", file.display()))?;

    let prefix = " ".repeat(indent);
    for line in render_schema_yaml(&schema) {
        println!("{prefix}{line}");
    }
    Ok(())
}
