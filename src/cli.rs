//! Argument helpers shared across binaries.
//!
//! The binaries parse flags by hand; these keep the error wording identical
//! between them.

use anyhow::{Result, anyhow};
use std::ffi::OsString;
use std::path::PathBuf;

/// Take the value following `flag`, requiring valid UTF-8.
pub fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

pub fn next_path(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<PathBuf> {
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

/// Convert a positional argument, requiring valid UTF-8.
pub fn utf8_arg(arg: OsString) -> Result<String> {
    arg.into_string()
        .map_err(|_| anyhow!("argument is not valid UTF-8"))
}
