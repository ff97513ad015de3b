//! Generates `api_catalog.json` from the service registry and the
//! function-id mapping.
//!
//! Every mapping key is checked against the registry before anything is
//! written; when keys are unresolved the full (sorted) list is printed to
//! stderr and the existing catalog is left untouched.

use anyhow::Result;
use apic_catalog::cli::{next_path, utf8_arg};
use apic_catalog::{
    CatalogBuilder, CatalogError, FunctionIdMapping, PathOverrides, ServiceRegistry, logging,
    validate_mapping, write_catalog,
};
use std::env;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let paths = parse_args()?.resolve()?;

    println!("Loading JSON files...");
    let registry = ServiceRegistry::load(&paths.services)?;
    let mapping = FunctionIdMapping::load(&paths.function_ids)?;
    println!("  - Found {} services", registry.len());
    println!("  - Found {} function-id mappings", mapping.len());

    println!("Validating keys...");
    let validated = match validate_mapping(&mapping, &registry) {
        Ok(validated) => validated,
        Err(CatalogError::UnresolvedKeys { keys }) => {
            report_unresolved(keys);
            std::process::exit(1);
        }
        Err(other) => return Err(other.into()),
    };
    println!("  - All keys resolved");

    println!("Generating catalog...");
    let catalog = CatalogBuilder::build(validated);
    let summary = write_catalog(&paths.catalog, &catalog)?;

    println!();
    println!(
        "✓ API catalog generated successfully: {}",
        paths.catalog.display()
    );
    println!("{summary}");
    Ok(())
}

fn report_unresolved(mut keys: Vec<String>) {
    keys.sort();
    eprintln!("ERROR: The following keys in service_function_ids.json do not exist in services.json:");
    for key in &keys {
        eprintln!("  - {key}");
    }
    eprintln!();
    eprintln!("Fix the mapping (or add the services) and run again. No catalog was written.");
}

fn parse_args() -> Result<PathOverrides> {
    let mut args = env::args_os().skip(1);
    let mut overrides = PathOverrides::default();

    while let Some(arg) = args.next() {
        let arg = utf8_arg(arg)?;
        match arg.as_str() {
            "--data-dir" => overrides.data_dir = Some(next_path(&mut args, "--data-dir")?),
            "--services" => overrides.services = Some(next_path(&mut args, "--services")?),
            "--function-ids" => {
                overrides.function_ids = Some(next_path(&mut args, "--function-ids")?)
            }
            "--output" => overrides.catalog = Some(next_path(&mut args, "--output")?),
            "--help" | "-h" => {
                usage();
                std::process::exit(0);
            }
            other => {
                usage();
                anyhow::bail!("unknown argument: {other}");
            }
        }
    }

    Ok(overrides)
}

fn usage() {
    eprintln!(
        "Usage: generate-catalog [--data-dir DIR] [--services FILE] [--function-ids FILE] [--output FILE]"
    );
}
