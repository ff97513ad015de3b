//! Shared library for the API catalog tooling.
//!
//! The crate turns two data sources describing the services behind the API
//! gateway (the service registry in `services.json` and the function-id
//! mapping in `service_function_ids.json`) into the categorized catalog in
//! `api_catalog.json`. The helper binaries under `src/bin/` wrap the library:
//! catalog generation, difference reporting, registry import and listing, key
//! renaming, and the small YAML utilities used when publishing.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod cli;
pub mod error;
pub mod function_ids;
pub mod importer;
mod input_schema;
pub mod listing;
pub mod logging;
pub mod product;
pub mod registry;
pub mod rename;
pub mod report;
pub mod target_url;
pub mod transport;
pub mod yaml_schema;

pub use catalog::{
    ApiEntry, Catalog, CatalogBuilder, CatalogSummary, ValidatedMapping, find_matching_services,
    generate_catalog, load_catalog_from_path, schema_location_for_function, unresolved_keys,
    validate_mapping, write_catalog,
};
pub use error::CatalogError;
pub use function_ids::FunctionIdMapping;
pub use registry::{ServiceDefinition, ServiceRecord, ServiceRegistry, load_service_records};
pub use report::DifferenceReport;
pub use transport::Transport;

pub const DATA_DIR_ENV: &str = "APIC_DATA_DIR";
pub const DATA_DIR_NAME: &str = "Data-Config";
pub const SERVICES_FILE: &str = "services.json";
pub const FUNCTION_IDS_FILE: &str = "service_function_ids.json";
pub const CATALOG_FILE: &str = "api_catalog.json";

/// Returns true when `candidate` holds a service registry.
fn is_data_dir(candidate: &Path) -> bool {
    candidate.join(SERVICES_FILE).is_file()
}

/// Verifies that an explicit `APIC_DATA_DIR` hint points at a data directory.
fn data_dir_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !is_data_dir(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        let nested = dir.join(DATA_DIR_NAME);
        if is_data_dir(&nested) {
            return Some(nested);
        }
        if is_data_dir(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the directory holding the registry and mapping files.
///
/// Search order: `APIC_DATA_DIR` when it points at a real data directory, then
/// the current directory and its ancestors (either `Data-Config/` inside them
/// or the directory itself), then the build-time hint for the bundled
/// `Data-Config`.
pub fn find_data_dir() -> Result<PathBuf> {
    if let Ok(env_dir) = env::var(DATA_DIR_ENV) {
        if let Some(dir) = data_dir_from_hint(&env_dir) {
            return Ok(dir);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(dir) = search_upwards(&cwd) {
            return Ok(dir);
        }
    }

    if let Some(hint) = option_env!("APIC_DATA_DIR_HINT") {
        if let Some(dir) = data_dir_from_hint(hint) {
            return Ok(dir);
        }
    }

    bail!(
        "Unable to locate {SERVICES_FILE}. Set {DATA_DIR_ENV} or run from a directory containing {DATA_DIR_NAME}/."
    );
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Locations of the files the catalog tooling reads and writes.
pub struct DataPaths {
    pub services: PathBuf,
    pub function_ids: PathBuf,
    pub catalog: PathBuf,
}

impl DataPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            services: dir.join(SERVICES_FILE),
            function_ids: dir.join(FUNCTION_IDS_FILE),
            catalog: dir.join(CATALOG_FILE),
        }
    }
}

/// Per-file overrides collected from command-line flags.
#[derive(Clone, Debug, Default)]
pub struct PathOverrides {
    pub data_dir: Option<PathBuf>,
    pub services: Option<PathBuf>,
    pub function_ids: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
}

impl PathOverrides {
    /// Apply overrides on top of the data directory defaults.
    ///
    /// The data directory is only looked up when some path is not overridden.
    pub fn resolve(self) -> Result<DataPaths> {
        let all_explicit =
            self.services.is_some() && self.function_ids.is_some() && self.catalog.is_some();
        let base = match (self.data_dir, all_explicit) {
            (Some(dir), _) => DataPaths::in_dir(&dir),
            (None, true) => DataPaths::in_dir(Path::new(".")),
            (None, false) => DataPaths::in_dir(&find_data_dir()?),
        };
        Ok(DataPaths {
            services: self.services.unwrap_or(base.services),
            function_ids: self.function_ids.unwrap_or(base.function_ids),
            catalog: self.catalog.unwrap_or(base.catalog),
        })
    }
}
