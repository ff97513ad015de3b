//! Typed failures surfaced by the catalog core and its input loaders.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Function-id keys that matched no registry entry, in mapping order.
    #[error("function-id keys with no matching service: {}", .keys.join(", "))]
    UnresolvedKeys { keys: Vec<String> },

    #[error("unable to parse {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} failed input validation:\n{details}", .path.display())]
    SchemaViolation { path: PathBuf, details: String },
}
