//! Shell-friendly views of the registry for deployment scripts.

use crate::registry::ServiceRecord;
use crate::transport::Transport;
use anyhow::{Result, bail};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingMode {
    /// `name|url|schema|tag` per usable record.
    Full,
    /// Service names only.
    Names,
    Count,
    /// Contract check; prints the record count like `Count`.
    Validate,
}

impl ListingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingMode::Full => "full",
            ListingMode::Names => "names",
            ListingMode::Count => "count",
            ListingMode::Validate => "validate",
        }
    }
}

impl TryFrom<&str> for ListingMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "full" => Ok(ListingMode::Full),
            "names" => Ok(ListingMode::Names),
            "count" => Ok(ListingMode::Count),
            "validate" => Ok(ListingMode::Validate),
            other => bail!("Unknown mode '{other}' (expected full|names|count|validate)"),
        }
    }
}

// Scripts that produced the registry sometimes wrote the literal "null".
fn is_present(value: &str) -> bool {
    !value.is_empty() && value != "null"
}

/// Render `records` for `mode`, one item per line.
pub fn render_listing(records: &[ServiceRecord], mode: ListingMode) -> Vec<String> {
    match mode {
        ListingMode::Count | ListingMode::Validate => vec![records.len().to_string()],
        ListingMode::Names => records
            .iter()
            .filter(|record| is_present(&record.name))
            .map(|record| record.name.clone())
            .collect(),
        ListingMode::Full => records
            .iter()
            .filter(|record| is_present(&record.name) && is_present(&record.url))
            .map(|record| {
                let tag = if record.tag.is_empty() {
                    Transport::Rest.as_str()
                } else {
                    record.tag.as_str()
                };
                format!(
                    "{}|{}|{}|{}",
                    record.name, record.url, record.schema_location, tag
                )
            })
            .collect(),
    }
}
