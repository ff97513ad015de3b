//! Import of the pipe-delimited `services.txt` flat file.
//!
//! Each non-comment line is `name | url | schema location`. The transport tag
//! is inferred from the schema location: anything mentioning "soap" is SOAP.

use crate::registry::ServiceRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Parse flat-file contents into registry records.
///
/// Blank lines and `#` comments are ignored. Lines that do not split into
/// exactly three fields are skipped with a warning.
pub fn parse_services_text(contents: &str) -> Vec<ServiceRecord> {
    let mut records = Vec::new();
    for (idx, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        let [name, url, schema_location] = parts.as_slice() else {
            warn!(line = idx + 1, content = line, "skipping malformed service line");
            continue;
        };

        records.push(ServiceRecord::new(
            *name,
            *url,
            *schema_location,
            infer_tag(schema_location),
        ));
    }
    records
}

fn infer_tag(schema_location: &str) -> &'static str {
    if schema_location.to_lowercase().contains("soap") {
        "soap"
    } else {
        "rest"
    }
}

pub fn parse_services_file(path: &Path) -> Result<Vec<ServiceRecord>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_services_text(&contents))
}
