//! Function-identifier index (`service_function_ids.json`).
//!
//! Each key names a service, or a service-name prefix, and lists the function
//! ids that must be published as separate catalog entries. Key order is kept:
//! it decides the order catalog groups are built in.

use crate::input_schema::{InputSchema, load_checked};
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionIdMapping(IndexMap<String, Vec<String>>);

impl FunctionIdMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and contract-check a mapping file.
    pub fn load(path: &Path) -> Result<Self> {
        load_checked(path, InputSchema::FunctionIds)
    }

    /// Insert or replace the ids for `key`; a replaced key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, function_ids: Vec<String>) {
        self.0.insert(key.into(), function_ids);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(key, ids)| (key.as_str(), ids.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Keys whose function-id list is empty, in mapping order.
    pub fn keys_without_ids(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, ids)| ids.is_empty())
            .map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for FunctionIdMapping {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, ids)| (key.into(), ids)).collect())
    }
}
