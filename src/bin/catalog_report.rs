//! Compares the registry, the function-id mapping and the generated catalog.
//!
//! Prints which registry services never made it into the catalog, which are
//! absent from the mapping, and which mapping keys carry no function ids.

use anyhow::{Result, bail};
use apic_catalog::cli::{next_path, utf8_arg};
use apic_catalog::{
    DifferenceReport, FunctionIdMapping, PathOverrides, ServiceRegistry, load_catalog_from_path,
    logging,
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

    let registry = ServiceRegistry::load(&paths.services)?;
    let mapping = FunctionIdMapping::load(&paths.function_ids)?;
    let catalog = load_catalog_from_path(&paths.catalog)?;

    let report = DifferenceReport::compute(&registry, &mapping, &catalog);
    print!("{report}");
    Ok(())
}

fn parse_args() -> Result<PathOverrides> {
    let mut args = env::args_os().skip(1);
    let mut overrides = PathOverrides::default();

    while let Some(arg) = args.next() {
        match utf8_arg(arg)?.as_str() {
            "--data-dir" => overrides.data_dir = Some(next_path(&mut args, "--data-dir")?),
            "--services" => overrides.services = Some(next_path(&mut args, "--services")?),
            "--function-ids" => {
                overrides.function_ids = Some(next_path(&mut args, "--function-ids")?)
            }
            "--catalog" => overrides.catalog = Some(next_path(&mut args, "--catalog")?),
            "--help" | "-h" => {
                println!(
                    "Usage: catalog-report [--data-dir DIR] [--services FILE] [--function-ids FILE] [--catalog FILE]"
                );
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other}"),
        }
    }

    Ok(overrides)
}
