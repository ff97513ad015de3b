use crate::catalog::model::{Catalog, CatalogSummary};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serialize a value as JSON indented with `indent` spaces.
pub fn to_json_pretty<T: Serialize>(value: &T, indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Replace `path` with `contents` via a temp file in the same directory.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(contents)
        .with_context(|| format!("writing temp file for {}", path.display()))?;
    tmp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

/// Write the catalog as 4-space indented JSON and return its summary counts.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<CatalogSummary> {
    let bytes = to_json_pretty(catalog, 4).context("serializing catalog")?;
    write_atomically(path, &bytes)?;
    Ok(catalog.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::generate_catalog;
    use crate::catalog::load_catalog_from_path;
    use crate::function_ids::FunctionIdMapping;
    use crate::registry::{ServiceRecord, ServiceRegistry};
    use tempfile::TempDir;

    #[test]
    fn written_catalog_reads_back_identically() {
        let registry = ServiceRegistry::from_records([
            ServiceRecord::new("Zeta Service", "https://z", "z/zeta.xsd", "soap"),
            ServiceRecord::new("Get LOV", "https://x", "s/lov.xsd", "rest"),
        ]);
        let mapping: FunctionIdMapping = [("Get LOV", vec!["47".to_string()])].into_iter().collect();
        let catalog = generate_catalog(&mapping, &registry).unwrap();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("api_catalog.json");
        let summary = write_catalog(&path, &catalog).expect("write catalog");
        assert_eq!(summary.total_entries(), 2);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n    \"REST\": {\n        \"Get LOV\": ["), "{text}");
        let reread = load_catalog_from_path(&path).unwrap();
        assert_eq!(reread, catalog);
    }

    #[test]
    fn overwrite_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale").unwrap();
        write_catalog(&path, &Catalog::default()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n    \"REST\": {},\n    \"SOAP\": {}\n}"
        );
    }
}
