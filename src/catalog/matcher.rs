use crate::registry::{ServiceDefinition, ServiceRegistry};

/// Resolve a function-id mapping key to the services it covers.
///
/// An exact name match wins outright and yields a single service. Otherwise
/// every service whose name starts with `key` followed by a space is returned,
/// in registry order. The space boundary keeps `Get Card` from claiming
/// `Get Cards List`. An empty result means the key is unresolved.
pub fn find_matching_services<'a>(
    key: &str,
    registry: &'a ServiceRegistry,
) -> Vec<&'a ServiceDefinition> {
    if let Some(definition) = registry.get(key) {
        return vec![definition];
    }

    let prefix = format!("{key} ");
    registry
        .iter()
        .filter(|definition| definition.name.starts_with(&prefix))
        .collect()
}
