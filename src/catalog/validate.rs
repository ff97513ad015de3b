//! Batch validation of function-id keys against the registry.
//!
//! Every key is checked before anything is reported, so a single run lists all
//! broken mappings. A passing check yields `ValidatedMapping`, the only input
//! the catalog builder accepts.

use crate::catalog::matcher::find_matching_services;
use crate::error::CatalogError;
use crate::function_ids::FunctionIdMapping;
use crate::registry::ServiceRegistry;

/// Keys that resolve to no service, in mapping order.
pub fn unresolved_keys(mapping: &FunctionIdMapping, registry: &ServiceRegistry) -> Vec<String> {
    mapping
        .keys()
        .filter(|key| find_matching_services(key, registry).is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Copy, Debug)]
/// Mapping and registry that passed `validate_mapping`.
pub struct ValidatedMapping<'a> {
    mapping: &'a FunctionIdMapping,
    registry: &'a ServiceRegistry,
}

impl<'a> ValidatedMapping<'a> {
    pub fn mapping(&self) -> &'a FunctionIdMapping {
        self.mapping
    }

    pub fn registry(&self) -> &'a ServiceRegistry {
        self.registry
    }
}

pub fn validate_mapping<'a>(
    mapping: &'a FunctionIdMapping,
    registry: &'a ServiceRegistry,
) -> Result<ValidatedMapping<'a>, CatalogError> {
    let keys = unresolved_keys(mapping, registry);
    if !keys.is_empty() {
        return Err(CatalogError::UnresolvedKeys { keys });
    }
    Ok(ValidatedMapping { mapping, registry })
}
