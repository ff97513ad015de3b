//! API catalog generation.
//!
//! The matcher resolves function-id keys against the service registry, the
//! validator checks every key up front, and the builder expands matched
//! services into catalog rows (rewriting schema locations per function id)
//! before appending services no key consumed. `writer` persists the result.

pub mod builder;
pub mod matcher;
pub mod model;
pub mod schema_path;
pub mod validate;
pub mod writer;

pub use builder::{CatalogBuilder, generate_catalog};
pub use matcher::find_matching_services;
pub use model::{ApiEntry, Catalog, CatalogSection, CatalogSummary, load_catalog_from_path};
pub use schema_path::schema_location_for_function;
pub use validate::{ValidatedMapping, unresolved_keys, validate_mapping};
pub use writer::write_catalog;
