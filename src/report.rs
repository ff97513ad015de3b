//! Difference report between the registry, the function-id mapping, and a
//! generated catalog.
//!
//! The report compares names only: a registry service counts as present in the
//! catalog when it is a group key, so services expanded under a prefix key are
//! listed as missing even though their rows exist. That is the view the
//! publishing scripts need when checking which services got their own group.

use crate::catalog::Catalog;
use crate::function_ids::FunctionIdMapping;
use crate::registry::ServiceRegistry;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DifferenceReport {
    pub registry_services: usize,
    pub mapping_keys: usize,
    pub catalog_groups: usize,
    /// Registry names that are not a catalog group key, sorted.
    pub missing_from_catalog: Vec<String>,
    /// Registry names that are not a mapping key, sorted.
    pub missing_from_mapping: Vec<String>,
    /// Mapping keys with an empty function-id list, sorted.
    pub keys_without_ids: Vec<String>,
}

impl DifferenceReport {
    pub fn compute(
        registry: &ServiceRegistry,
        mapping: &FunctionIdMapping,
        catalog: &Catalog,
    ) -> Self {
        let service_names: BTreeSet<&str> = registry.names().collect();
        let catalog_names: BTreeSet<&str> = catalog.group_keys().collect();

        let missing_from_catalog = service_names
            .iter()
            .filter(|name| !catalog_names.contains(*name))
            .map(|name| name.to_string())
            .collect();
        let missing_from_mapping = service_names
            .iter()
            .filter(|name| !mapping.contains_key(name))
            .map(|name| name.to_string())
            .collect();
        let keys_without_ids: BTreeSet<&str> = mapping.keys_without_ids().collect();

        Self {
            registry_services: service_names.len(),
            mapping_keys: mapping.len(),
            catalog_groups: catalog_names.len(),
            missing_from_catalog,
            missing_from_mapping,
            keys_without_ids: keys_without_ids.into_iter().map(str::to_string).collect(),
        }
    }
}

impl fmt::Display for DifferenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total services in registry: {}", self.registry_services)?;
        writeln!(f, "Total keys in function-id mapping: {}", self.mapping_keys)?;
        writeln!(f, "Total groups in catalog: {}", self.catalog_groups)?;
        writeln!(f)?;

        writeln!(
            f,
            "Services in registry but NOT in catalog: {}",
            self.missing_from_catalog.len()
        )?;
        write_names(f, &self.missing_from_catalog)?;
        writeln!(f)?;

        writeln!(
            f,
            "Services in registry but NOT in function-id mapping: {}",
            self.missing_from_mapping.len()
        )?;
        write_names(f, &self.missing_from_mapping)?;
        writeln!(f)?;

        writeln!(f, "Services with empty function ID arrays:")?;
        writeln!(f, "Total: {}", self.keys_without_ids.len())?;
        write_names(f, &self.keys_without_ids)
    }
}

fn write_names(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    for name in names {
        writeln!(f, "  - {name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::generate_catalog;
    use crate::registry::ServiceRecord;

    #[test]
    fn prefix_expanded_services_are_not_group_keys() {
        let registry = ServiceRegistry::from_records([
            ServiceRecord::new("Get LOV", "https://x", "", "rest"),
            ServiceRecord::new("SADAD Cutoff Bank Serial", "https://s", "", "rest"),
            ServiceRecord::new("Manage Outbound", "https://o", "", "soap"),
        ]);
        let mapping: FunctionIdMapping = [
            ("SADAD Cutoff", vec!["100".to_string()]),
            ("Get LOV", vec![]),
        ]
        .into_iter()
        .collect();
        let catalog = generate_catalog(&mapping, &registry).unwrap();

        let report = DifferenceReport::compute(&registry, &mapping, &catalog);
        assert_eq!(report.registry_services, 3);
        assert_eq!(report.mapping_keys, 2);
        assert_eq!(report.catalog_groups, 3);
        assert_eq!(report.missing_from_catalog, vec!["SADAD Cutoff Bank Serial"]);
        assert_eq!(
            report.missing_from_mapping,
            vec!["Manage Outbound", "SADAD Cutoff Bank Serial"]
        );
        assert_eq!(report.keys_without_ids, vec!["Get LOV"]);
    }

    #[test]
    fn rendering_lists_each_section() {
        let report = DifferenceReport {
            registry_services: 2,
            mapping_keys: 1,
            catalog_groups: 2,
            missing_from_catalog: Vec::new(),
            missing_from_mapping: vec!["Manage Outbound".to_string()],
            keys_without_ids: vec!["Get LOV".to_string()],
        };
        let text = report.to_string();
        assert!(text.contains("Services in registry but NOT in catalog: 0\n\n"));
        assert!(text.contains("NOT in function-id mapping: 1\n  - Manage Outbound\n"));
        assert!(text.ends_with("Total: 1\n  - Get LOV\n"));
    }
}
