//! JSON Schema contracts for the registry and function-id input files.
//!
//! Inputs are read into a `serde_json::Value`, checked against the schema
//! embedded from `schema/`, and only then deserialized into typed structures.
//! Typed deserialization reads the original text again because `Value` objects
//! do not keep key order. Every violation is collected so a broken file is
//! reported in one pass.

use crate::error::CatalogError;
use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

const SERVICES_SCHEMA: &str = include_str!("../schema/services.schema.json");
const FUNCTION_IDS_SCHEMA: &str = include_str!("../schema/function_ids.schema.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputSchema {
    Services,
    FunctionIds,
}

impl InputSchema {
    fn raw(self) -> &'static str {
        match self {
            InputSchema::Services => SERVICES_SCHEMA,
            InputSchema::FunctionIds => FUNCTION_IDS_SCHEMA,
        }
    }

    fn label(self) -> &'static str {
        match self {
            InputSchema::Services => "services",
            InputSchema::FunctionIds => "function ids",
        }
    }

    fn compile(self) -> Result<JSONSchema> {
        let schema: Value = serde_json::from_str(self.raw())
            .with_context(|| format!("parsing embedded {} schema", self.label()))?;
        JSONSchema::compile(&schema)
            .map_err(|err| anyhow!("compiling embedded {} schema: {err}", self.label()))
    }
}

fn parse_json<T: DeserializeOwned>(path: &Path, data: &str) -> Result<T> {
    let parsed = serde_json::from_str(data).map_err(|source| CatalogError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parsed)
}

pub(crate) fn validate_input(path: &Path, value: &Value, schema: InputSchema) -> Result<()> {
    let compiled = schema.compile()?;
    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| {
                let location = err.instance_path.to_string();
                if location.is_empty() {
                    format!("(root): {err}")
                } else {
                    format!("{location}: {err}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        return Err(CatalogError::SchemaViolation {
            path: path.to_path_buf(),
            details,
        }
        .into());
    }
    Ok(())
}

/// Read `path`, check it against `schema`, and deserialize it.
///
/// Parse and shape failures surface as `MalformedInput`, contract failures as
/// `SchemaViolation`.
pub(crate) fn load_checked<T: DeserializeOwned>(path: &Path, schema: InputSchema) -> Result<T> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value = parse_json(path, &data)?;
    validate_input(path, &value, schema)?;
    parse_json(path, &data)
}
