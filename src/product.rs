//! API list maintenance for gateway product YAML files.
//!
//! A product file lists its APIs under a top-level `apis:` key, one entry per
//! two-space-indented `name:` line with any details indented further:
//!
//! ```text
//! apis:
//!   getlov1.0.0:
//!     name: getlov:1.0.0
//!   billpayment1.0.0:
//!     name: billpayment:1.0.0
//! ```
//!
//! Publishing merges newly generated API names into that list.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// API names declared in the `apis:` block of a product document.
pub fn existing_api_names(contents: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut lines = contents.lines();

    if !lines.by_ref().any(|line| line.trim_end() == "apis:") {
        return names;
    }

    let mut started = false;
    for line in lines {
        if !started && line.trim().is_empty() {
            continue;
        }
        started = true;
        if line.starts_with("    ") {
            continue;
        }
        match entry_name(line) {
            Some(name) => {
                names.insert(name.to_string());
            }
            None => break,
        }
    }
    names
}

// `  <name>:...` where the name has no whitespace.
fn entry_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("  ")?;
    let token = rest.split(char::is_whitespace).next()?;
    let colon = token.find(':')?;
    if colon == 0 {
        return None;
    }
    let name = token[..colon].trim();
    (!name.is_empty()).then_some(name)
}

/// Read API names from a product file; an unreadable file counts as empty.
pub fn load_existing_api_names(path: &Path) -> BTreeSet<String> {
    match fs::read_to_string(path) {
        Ok(contents) => existing_api_names(&contents),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unable to read existing product");
            BTreeSet::new()
        }
    }
}

/// Union of existing and new names, trimmed, without blanks, sorted.
pub fn merge_api_names<S: AsRef<str>>(existing: &BTreeSet<String>, new_apis: &[S]) -> Vec<String> {
    let mut merged = existing.clone();
    for api in new_apis {
        let api = api.as_ref().trim();
        if !api.is_empty() {
            merged.insert(api.to_string());
        }
    }
    merged.into_iter().collect()
}
