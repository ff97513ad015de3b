//! Serializable representation of `api_catalog.json`.
//!
//! The catalog has one section per transport. Each section maps a group key
//! (a function-id mapping key, or a bare service name for unmapped services)
//! to the ordered rows published under it.

use crate::catalog::schema_path::schema_location_for_function;
use crate::registry::ServiceDefinition;
use crate::transport::Transport;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One catalog row.
pub struct ApiEntry {
    #[serde(rename = "API Name")]
    pub api_name: String,
    #[serde(rename = "Url")]
    pub url: String,
    #[serde(rename = "Schema Location")]
    pub schema_location: String,
    /// The registry tag exactly as written (`"SOAP"`, `"rest"`, `""`, ...).
    /// It is not lowercased; the section a row lands in is the normalized
    /// form.
    pub tag: String,
}

impl ApiEntry {
    /// Row for a service published as-is.
    pub(crate) fn for_service(definition: &ServiceDefinition) -> Self {
        Self {
            api_name: definition.name.clone(),
            url: definition.url.clone(),
            schema_location: definition.schema_location.clone(),
            tag: definition.tag.clone(),
        }
    }

    /// Row for one function id of a service.
    pub(crate) fn for_function(definition: &ServiceDefinition, function_id: &str) -> Self {
        Self {
            api_name: format!("{} {function_id}", definition.name),
            url: definition.url.clone(),
            schema_location: schema_location_for_function(
                &definition.schema_location,
                function_id,
            ),
            tag: definition.tag.clone(),
        }
    }
}

/// Group key → rows, in insertion order.
pub type CatalogSection = IndexMap<String, Vec<ApiEntry>>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "REST", default)]
    pub rest: CatalogSection,
    #[serde(rename = "SOAP", default)]
    pub soap: CatalogSection,
}

impl Catalog {
    pub fn section(&self, transport: Transport) -> &CatalogSection {
        match transport {
            Transport::Rest => &self.rest,
            Transport::Soap => &self.soap,
        }
    }

    pub fn section_mut(&mut self, transport: Transport) -> &mut CatalogSection {
        match transport {
            Transport::Rest => &mut self.rest,
            Transport::Soap => &mut self.soap,
        }
    }

    pub fn group_count(&self, transport: Transport) -> usize {
        self.section(transport).len()
    }

    pub fn entry_count(&self, transport: Transport) -> usize {
        self.section(transport).values().map(Vec::len).sum()
    }

    /// Group keys of both sections, REST first.
    pub fn group_keys(&self) -> impl Iterator<Item = &str> {
        self.rest.keys().chain(self.soap.keys()).map(String::as_str)
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            rest_groups: self.group_count(Transport::Rest),
            rest_entries: self.entry_count(Transport::Rest),
            soap_groups: self.group_count(Transport::Soap),
            soap_entries: self.entry_count(Transport::Soap),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
/// Group and row counts per section.
pub struct CatalogSummary {
    pub rest_groups: usize,
    pub rest_entries: usize,
    pub soap_groups: usize,
    pub soap_entries: usize,
}

impl CatalogSummary {
    pub fn total_entries(&self) -> usize {
        self.rest_entries + self.soap_entries
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  - REST Services: {}, APIs: {}",
            self.rest_groups, self.rest_entries
        )?;
        writeln!(
            f,
            "  - SOAP Services: {}, APIs: {}",
            self.soap_groups, self.soap_entries
        )?;
        write!(f, "  - Total APIs: {}", self.total_entries())
    }
}

/// Read a previously written catalog from disk.
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog: Catalog =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(catalog)
}
