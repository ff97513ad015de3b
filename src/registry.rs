//! Service registry: the backend endpoints behind the gateway.
//!
//! `ServiceRecord` is the on-disk shape of one `services.json` element.
//! `ServiceDefinition` is the normalized, immutable form the catalog core works
//! with; it carries the parsed `Transport` so tag strings are interpreted once.
//! The registry keys definitions by name and keeps file order, which the
//! matcher and the unmapped-service pass both depend on.

use crate::input_schema::{InputSchema, load_checked};
use crate::transport::Transport;
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// One registry record as stored in `services.json`.
///
/// Missing and `null` fields both read as empty strings.
pub struct ServiceRecord {
    #[serde(rename = "API Name", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "Url", default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(rename = "Schema Location", default, deserialize_with = "null_as_empty")]
    pub schema_location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tag: String,
}

impl ServiceRecord {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        schema_location: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            schema_location: schema_location.into(),
            tag: tag.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Normalized registry entry.
pub struct ServiceDefinition {
    pub name: String,
    pub url: String,
    pub schema_location: String,
    /// Raw tag as written in the registry; copied verbatim into catalog rows.
    pub tag: String,
    pub transport: Transport,
}

impl From<ServiceRecord> for ServiceDefinition {
    fn from(record: ServiceRecord) -> Self {
        let transport = Transport::from_tag(&record.tag);
        Self {
            name: record.name,
            url: record.url,
            schema_location: record.schema_location,
            tag: record.tag,
            transport,
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Registry of service definitions keyed by name, in file order.
pub struct ServiceRegistry {
    services: IndexMap<String, ServiceDefinition>,
}

impl ServiceRegistry {
    /// Build a registry from raw records.
    ///
    /// Records without a name are skipped. A repeated name replaces the earlier
    /// definition but keeps the position where the name first appeared.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ServiceRecord>,
    {
        let mut services = IndexMap::new();
        for (idx, record) in records.into_iter().enumerate() {
            if record.name.is_empty() {
                debug!(record = idx, "skipping service record without an API Name");
                continue;
            }
            let definition = ServiceDefinition::from(record);
            let name = definition.name.clone();
            if services.insert(name, definition).is_some() {
                warn!(record = idx, "duplicate service name; later definition wins");
            }
        }
        Self { services }
    }

    /// Load `services.json`, check it against the input contract, and index it.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_records(load_service_records(path)?))
    }

    pub fn get(&self, name: &str) -> Option<&ServiceDefinition> {
        self.services.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Definitions in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &ServiceDefinition> {
        self.services.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Read the raw records from `services.json` without deduplication.
pub fn load_service_records(path: &Path) -> Result<Vec<ServiceRecord>> {
    load_checked(path, InputSchema::Services)
}
