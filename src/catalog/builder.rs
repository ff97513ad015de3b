//! Two-pass catalog construction.
//!
//! Pass one walks the function-id mapping in order and expands every matched
//! service under the mapping key, one row per function id (or a single row
//! when the id list is empty). Pass two appends every registry service that
//! no key consumed as its own single-row group.
//!
//! A service reachable from two different keys is expanded under both groups.
//! That duplication is kept and logged as a warning for each repeat.

use crate::catalog::matcher::find_matching_services;
use crate::catalog::model::{ApiEntry, Catalog};
use crate::catalog::validate::{ValidatedMapping, validate_mapping};
use crate::error::CatalogError;
use crate::function_ids::FunctionIdMapping;
use crate::registry::ServiceRegistry;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Accumulates the catalog while tracking which services were consumed.
pub struct CatalogBuilder<'a> {
    registry: &'a ServiceRegistry,
    catalog: Catalog,
    // service name -> first group key that consumed it
    processed: BTreeMap<&'a str, &'a str>,
}

impl<'a> CatalogBuilder<'a> {
    /// Build the catalog for a validated mapping.
    pub fn build(validated: ValidatedMapping<'a>) -> Catalog {
        let mut builder = Self {
            registry: validated.registry(),
            catalog: Catalog::default(),
            processed: BTreeMap::new(),
        };
        for (key, function_ids) in validated.mapping().iter() {
            builder.add_mapped_group(key, function_ids);
        }
        builder.add_unmapped_services();
        builder.catalog
    }

    fn add_mapped_group(&mut self, key: &'a str, function_ids: &'a [String]) {
        for definition in find_matching_services(key, self.registry) {
            if let Some(first_group) = self.processed.insert(&definition.name, key) {
                warn!(
                    service = %definition.name,
                    first_group,
                    group = key,
                    "service matched by more than one function-id key; it is emitted under both groups"
                );
            }

            let rows = self
                .catalog
                .section_mut(definition.transport)
                .entry(key.to_string())
                .or_default();
            if function_ids.is_empty() {
                rows.push(ApiEntry::for_service(definition));
            } else {
                rows.extend(
                    function_ids
                        .iter()
                        .map(|function_id| ApiEntry::for_function(definition, function_id)),
                );
            }
        }
    }

    fn add_unmapped_services(&mut self) {
        let registry = self.registry;
        for definition in registry.iter() {
            if self.processed.contains_key(definition.name.as_str()) {
                continue;
            }
            debug!(service = %definition.name, "service has no function-id key");
            self.catalog
                .section_mut(definition.transport)
                .entry(definition.name.clone())
                .or_default()
                .push(ApiEntry::for_service(definition));
        }
    }
}

/// Validate `mapping` against `registry` and build the catalog.
///
/// Nothing is built when any key is unresolved; the error lists all of them.
pub fn generate_catalog(
    mapping: &FunctionIdMapping,
    registry: &ServiceRegistry,
) -> Result<Catalog, CatalogError> {
    let validated = validate_mapping(mapping, registry)?;
    Ok(CatalogBuilder::build(validated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ServiceRecord;
    use crate::transport::Transport;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn api_names(catalog: &Catalog, transport: Transport, group: &str) -> Vec<String> {
        catalog
            .section(transport)
            .get(group)
            .map(|rows| rows.iter().map(|row| row.api_name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn single_service_with_function_id() {
        let registry = ServiceRegistry::from_records([ServiceRecord::new(
            "Get LOV",
            "https://x",
            "s/lov.xsd",
            "rest",
        )]);
        let mapping: FunctionIdMapping = [("Get LOV", ids(&["47"]))].into_iter().collect();
        let catalog = generate_catalog(&mapping, &registry).expect("valid mapping");

        let expected = serde_json::json!({
            "REST": {"Get LOV": [{
                "API Name": "Get LOV 47",
                "Url": "https://x",
                "Schema Location": "s/lov-47.xsd",
                "tag": "rest"
            }]},
            "SOAP": {}
        });
        assert_eq!(serde_json::to_value(&catalog).unwrap(), expected);
    }

    #[test]
    fn prefix_group_fans_out_per_service_and_id() {
        let registry = ServiceRegistry::from_records([
            ServiceRecord::new("Western Union Send Money Store", "https://a", "wu/store.xsd", "soap"),
            ServiceRecord::new("Western Union Send Money Validation", "https://b", "wu/val.xsd", "soap"),
        ]);
        let mapping: FunctionIdMapping = [("Western Union Send Money", ids(&["109", "110"]))]
            .into_iter()
            .collect();
        let catalog = generate_catalog(&mapping, &registry).unwrap();

        assert!(catalog.rest.is_empty());
        assert_eq!(
            api_names(&catalog, Transport::Soap, "Western Union Send Money"),
            vec![
                "Western Union Send Money Store 109",
                "Western Union Send Money Store 110",
                "Western Union Send Money Validation 109",
                "Western Union Send Money Validation 110",
            ]
        );
        let rows = catalog.soap.get("Western Union Send Money").unwrap();
        assert_eq!(rows[3].schema_location, "wu/val-110.xsd");
        assert_eq!(rows[3].url, "https://b");
    }

    #[test]
    fn empty_id_list_emits_one_unmodified_row_per_match() {
        let registry = ServiceRegistry::from_records([
            ServiceRecord::new("Bill Payment", "https://bp", "bp/bill.xsd", "rest"),
            ServiceRecord::new("Bill Payment MOI Wrapper", "https://moi", "bp/moi.xsd", "rest"),
        ]);
        let mapping: FunctionIdMapping = [("Bill Payment", vec![])].into_iter().collect();
        let catalog = generate_catalog(&mapping, &registry).unwrap();

        let rows = catalog.rest.get("Bill Payment").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].api_name, "Bill Payment");
        assert_eq!(rows[0].schema_location, "bp/bill.xsd");
        // exact match consumed only "Bill Payment"; the wrapper stays unmapped
        assert_eq!(
            api_names(&catalog, Transport::Rest, "Bill Payment MOI Wrapper"),
            vec!["Bill Payment MOI Wrapper"]
        );
    }

    #[test]
    fn unmapped_services_follow_mapped_groups_in_registry_order() {
        let registry = ServiceRegistry::from_records([
            ServiceRecord::new("Zeta", "https://z", "z.xsd", "SOAP"),
            ServiceRecord::new("Get LOV", "https://x", "lov.xsd", "rest"),
            ServiceRecord::new("Alpha", "https://a", "", "unknown"),
        ]);
        let mapping: FunctionIdMapping = [("Get LOV", ids(&["47"]))].into_iter().collect();
        let catalog = generate_catalog(&mapping, &registry).unwrap();

        assert_eq!(catalog.rest.keys().collect::<Vec<_>>(), vec!["Get LOV", "Alpha"]);
        assert_eq!(catalog.soap.keys().collect::<Vec<_>>(), vec!["Zeta"]);
        assert_eq!(catalog.soap.get("Zeta").unwrap()[0].tag, "SOAP");
    }

    #[test]
    fn every_service_appears_exactly_once_without_overlapping_keys() {
        let registry = ServiceRegistry::from_records([
            ServiceRecord::new("Get LOV", "https://x", "lov.xsd", "rest"),
            ServiceRecord::new("Manage Outbound", "https://o", "o.xsd", "soap"),
            ServiceRecord::new("Manage Nafath Authentication", "https://n", "n.xsd", "rest"),
            ServiceRecord::new("Manage Nafath Authentication Callback", "https://c", "c.xsd", "rest"),
        ]);
        let mapping: FunctionIdMapping = [
            ("Get LOV", ids(&["1", "2", "3"])),
            ("Manage Nafath Authentication", ids(&["69"])),
        ]
        .into_iter()
        .collect();
        let catalog = generate_catalog(&mapping, &registry).unwrap();

        assert_eq!(catalog.rest.get("Get LOV").unwrap().len(), 3);
        assert_eq!(catalog.summary().total_entries(), 3 + 1 + 1 + 1);
        let mut seen: Vec<&str> = catalog.group_keys().collect();
        seen.sort();
        assert_eq!(
            seen,
            vec![
                "Get LOV",
                "Manage Nafath Authentication",
                "Manage Nafath Authentication Callback",
                "Manage Outbound"
            ]
        );
    }

    #[test]
    fn service_reached_by_two_keys_is_emitted_twice() {
        let registry = ServiceRegistry::from_records([ServiceRecord::new(
            "SADAD Settlement SBA SRA Request",
            "https://s",
            "s.xsd",
            "rest",
        )]);
        let mapping: FunctionIdMapping = [
            ("SADAD Settlement", ids(&["7"])),
            ("SADAD Settlement SBA", ids(&["9"])),
        ]
        .into_iter()
        .collect();
        let catalog = generate_catalog(&mapping, &registry).unwrap();

        assert_eq!(
            api_names(&catalog, Transport::Rest, "SADAD Settlement"),
            vec!["SADAD Settlement SBA SRA Request 7"]
        );
        assert_eq!(
            api_names(&catalog, Transport::Rest, "SADAD Settlement SBA"),
            vec!["SADAD Settlement SBA SRA Request 9"]
        );
        assert_eq!(catalog.rest.len(), 2);
    }

    #[test]
    fn group_splits_across_sections_by_service_transport() {
        let registry = ServiceRegistry::from_records([
            ServiceRecord::new("Authenticate User Mock Authenticate", "https://r", "", "rest"),
            ServiceRecord::new("Authenticate User Mock Change Password", "https://s", "", "soap"),
        ]);
        let mapping: FunctionIdMapping =
            [("Authenticate User Mock", vec![])].into_iter().collect();
        let catalog = generate_catalog(&mapping, &registry).unwrap();

        assert_eq!(
            api_names(&catalog, Transport::Rest, "Authenticate User Mock"),
            vec!["Authenticate User Mock Authenticate"]
        );
        assert_eq!(
            api_names(&catalog, Transport::Soap, "Authenticate User Mock"),
            vec!["Authenticate User Mock Change Password"]
        );
    }

    #[test]
    fn unresolved_keys_abort_generation() {
        let registry =
            ServiceRegistry::from_records([ServiceRecord::new("B", "https://b", "", "rest")]);
        let mapping: FunctionIdMapping = [("A", vec![]), ("B", vec![]), ("C", vec![])]
            .into_iter()
            .collect();
        let err = generate_catalog(&mapping, &registry).expect_err("A and C unresolved");
        assert_eq!(
            err.to_string(),
            "function-id keys with no matching service: A, C"
        );
    }

    #[test]
    fn building_twice_is_deterministic() {
        let registry = ServiceRegistry::from_records([
            ServiceRecord::new("Get LOV", "https://x", "lov.xsd", "rest"),
            ServiceRecord::new("Bill Payment", "https://bp", "bp.xsd", "soap"),
        ]);
        let mapping: FunctionIdMapping = [("Get LOV", ids(&["47", "48"]))].into_iter().collect();
        let first = generate_catalog(&mapping, &registry).unwrap();
        let second = generate_catalog(&mapping, &registry).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
