//! Message assertions returning `anyhow` errors for use inside step functions.

use std::fmt::Display;

use anyhow::{Result, ensure};

/// Succeeds when the rendered `value` contains `needle`.
///
/// # Errors
///
/// Returns an error quoting both strings when `needle` is missing.
pub fn contains(value: &impl Display, needle: &str) -> Result<()> {
    let rendered = value.to_string();
    ensure!(
        rendered.contains(needle),
        "expected {rendered:?} to contain {needle:?}"
    );
    Ok(())
}

/// Succeeds when the rendered `value` equals `expected` exactly.
///
/// # Errors
///
/// Returns an error quoting both strings when they differ.
pub fn renders_as(value: &impl Display, expected: &str) -> Result<()> {
    let rendered = value.to_string();
    ensure!(
        rendered == expected,
        "expected {expected:?}, rendered {rendered:?}"
    );
    Ok(())
}
