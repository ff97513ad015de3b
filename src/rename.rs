//! Re-keying of a function-id mapping through a rename table.
//!
//! Mappings exported from the integration layer are keyed by internal
//! operation names (`GetLOV`); the catalog needs the published service names
//! (`Get LOV`). A rename table lists one rule per line:
//!
//! ```text
//! 47 Get LOV GetLOV
//! ```
//!
//! The leading index is ignored, the last token is the internal key and the
//! words in between form the published name. Several published names may
//! share one internal key.

use crate::function_ids::FunctionIdMapping;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameRule {
    pub original: String,
    pub mapped: String,
}

/// Parse a rename table; lines with fewer than three tokens are ignored.
pub fn parse_rename_table(text: &str) -> Vec<RenameRule> {
    text.lines()
        .filter_map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 3 {
                return None;
            }
            let mapped = tokens[tokens.len() - 1];
            let original = tokens[1..tokens.len() - 1].join(" ");
            Some(RenameRule {
                original,
                mapped: mapped.to_string(),
            })
        })
        .collect()
}

pub fn load_rename_table(path: &Path) -> Result<Vec<RenameRule>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_rename_table(&text))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenameOutcome {
    pub mapping: FunctionIdMapping,
    /// Rules whose internal key was absent from the source mapping.
    pub missing: Vec<RenameRule>,
    /// Source keys no rule referenced; they are not carried over.
    pub unused_keys: Vec<String>,
}

/// Build a mapping keyed by published names, in table order.
///
/// A rule whose internal key is missing still produces its published key with
/// an empty id list.
pub fn rename_keys(source: &FunctionIdMapping, rules: &[RenameRule]) -> RenameOutcome {
    let mut mapping = FunctionIdMapping::new();
    let mut missing = Vec::new();
    let mut used: BTreeSet<&str> = BTreeSet::new();

    for rule in rules {
        match source.get(&rule.mapped) {
            Some(ids) => {
                mapping.insert(rule.original.clone(), ids.to_vec());
                used.insert(rule.mapped.as_str());
            }
            None => {
                warn!(
                    mapped = %rule.mapped,
                    original = %rule.original,
                    "mapped key not found in source mapping"
                );
                mapping.insert(rule.original.clone(), Vec::new());
                missing.push(rule.clone());
            }
        }
    }

    let unused_keys: Vec<String> = source
        .keys()
        .filter(|key| !used.contains(key))
        .map(str::to_string)
        .collect();
    for key in &unused_keys {
        info!(key = %key, "source key not referenced by the rename table; dropped");
    }

    RenameOutcome {
        mapping,
        missing,
        unused_keys,
    }
}
