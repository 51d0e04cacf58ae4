//! Shared text normalization helpers for behavioural test suites.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Normalizes a scalar placeholder by trimming and unquoting one outer layer.
///
/// Whitespace inside the quotes is kept, so `"\"\""` yields an empty string
/// and `"' x '"` yields `" x "`.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).to_owned()
}

/// Parses a normalised placeholder with [`str::parse`].
///
/// # Errors
///
/// Returns an error naming the placeholder when parsing fails.
pub fn parse_scalar<T>(value: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let scalar = normalize_scalar(value);
    scalar
        .parse()
        .map_err(|err| anyhow::anyhow!("cannot parse placeholder {scalar:?}: {err}"))
}
