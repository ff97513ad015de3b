//! Points the `target-url` property of an API YAML file at a new backend.
//!
//! Exits 0 when a value was replaced and 1 when the file had nothing to patch.

use anyhow::{Result, bail};
use apic_catalog::cli::utf8_arg;
use apic_catalog::logging;
use apic_catalog::target_url::update_target_url_file;
use std::env;
use std::path::PathBuf;

fn main() {
    logging::init();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let mut args = env::args_os().skip(1);
    let (Some(file), Some(url)) = (args.next(), args.next()) else {
        bail!("Usage: update-target-url <yaml_file> <new_url>");
    };
    if args.next().is_some() {
        bail!("Usage: update-target-url <yaml_file> <new_url>");
    }
    let file = PathBuf::from(file);
    let url = utf8_arg(url)?;

    let updated = update_target_url_file(&file, &url)?;
    if updated {
        println!("Updated target-url in {} to {url}", file.display());
    } else {
        eprintln!("No target-url value found in {}", file.display());
    }
    Ok(updated)
}
