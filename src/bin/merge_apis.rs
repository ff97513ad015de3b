//! Merges newly generated API names into the list a product already has.
//!
//! Usage: `merge-apis <product_file> <api>...`; prints the sorted union on one
//! line, space separated.

use anyhow::{Result, bail};
use apic_catalog::cli::utf8_arg;
use apic_catalog::logging;
use apic_catalog::product::{load_existing_api_names, merge_api_names};
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
    let Some(product) = args.next() else {
        bail!("Usage: merge-apis <product_file> <api>...");
    };
    let product = PathBuf::from(product);
    let new_apis = args.map(utf8_arg).collect::<Result<Vec<_>>>()?;

    let existing = load_existing_api_names(&product);
    let merged = merge_api_names(&existing, &new_apis);
    println!("{}", merged.join(" "));
    Ok(())
}
