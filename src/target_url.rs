//! Rewrites the `target-url` property of a gateway API definition.
//!
//! The generated API YAML comes from a fixed template, so a line-oriented
//! state machine is enough: after a line mentioning `target-url:`, the next
//! `value:` line is replaced. Two shapes occur:
//!
//! ```text
//! target-url:
//!   value: https://old          # inline
//! target-url:
//!   value: >-                   # folded block, URL on the next line
//!     https://old
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Scanning,
    InTargetUrl,
    InValueBlock,
}

/// Patch every `target-url` value in `contents`.
///
/// Returns the new document and whether any value was replaced. Lines keep
/// their original endings; replaced lines always end with `\n`.
pub fn patch_target_url(contents: &str, new_url: &str) -> (String, bool) {
    let mut output = String::with_capacity(contents.len() + new_url.len());
    let mut state = State::Scanning;
    let mut updated = false;

    for line in contents.split_inclusive('\n') {
        if line.contains("target-url:") {
            state = State::InTargetUrl;
            output.push_str(line);
            continue;
        }

        match state {
            State::InTargetUrl if line.contains("value:") => {
                if line.contains(">-") {
                    state = State::InValueBlock;
                    output.push_str(line);
                } else {
                    let indent = line.split("value:").next().unwrap_or_default();
                    output.push_str(&format!("{indent}value: {new_url}\n"));
                    state = State::Scanning;
                    updated = true;
                }
            }
            State::InValueBlock => {
                let indent_len = line.len() - line.trim_start().len();
                output.push_str(&format!("{}{new_url}\n", &line[..indent_len]));
                state = State::Scanning;
                updated = true;
            }
            _ => output.push_str(line),
        }
    }

    (output, updated)
}

/// Patch the file in place. Returns whether a value was replaced.
pub fn update_target_url_file(path: &Path, new_url: &str) -> Result<bool> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let (patched, updated) = patch_target_url(&contents, new_url);
    fs::write(path, patched).with_context(|| format!("writing {}", path.display()))?;
    Ok(updated)
}
