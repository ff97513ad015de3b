//! Prints registry contents in line-oriented forms for shell scripts.
//!
//! Usage: `services-query <json_file> [full|names|count|validate]`

use anyhow::{Result, bail};
use apic_catalog::cli::utf8_arg;
use apic_catalog::listing::{ListingMode, render_listing};
use apic_catalog::{load_service_records, logging};
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
    let mut args = env::args_os().skip(1);
    let Some(file) = args.next() else {
        usage();
        std::process::exit(1);
    };
    let file = PathBuf::from(file);
    let mode = match args.next() {
        Some(raw) => ListingMode::try_from(utf8_arg(raw)?.as_str())?,
        None => ListingMode::Full,
    };
    if let Some(extra) = args.next() {
        bail!("unexpected argument: {}", extra.to_string_lossy());
    }

    if !file.is_file() {
        bail!("File not found: {}", file.display());
    }
    let records = load_service_records(&file)?;
    for line in render_listing(&records, mode) {
        println!("{line}");
    }
    Ok(())
}

fn usage() {
    eprintln!("Usage: services-query <json_file> [mode]");
    eprintln!("Modes: full (default), names, count, validate");
}
