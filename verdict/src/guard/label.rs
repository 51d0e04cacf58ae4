//! Short, source-like names for Rust types.

use std::any::type_name;

/// Returns the name of `T` with module paths stripped from every segment.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`; `&str`,
/// tuples and arrays render as written in source.
///
/// # Examples
///
/// ```
/// use verdict::type_label;
/// assert_eq!(type_label::<Vec<String>>(), "Vec<String>");
/// assert_eq!(type_label::<Option<&str>>(), "Option<&str>");
/// assert_eq!(type_label::<(i32, u8)>(), "(i32, u8)");
/// ```
#[must_use]
pub fn type_label<T: ?Sized>() -> String {
    shorten(type_name::<T>())
}

fn is_path_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == ':'
}

/// Keeps the last `::`-separated segment of every path in `full`.
pub(crate) fn shorten(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path = String::new();
    for ch in full.chars() {
        if is_path_char(ch) {
            path.push(ch);
            continue;
        }
        push_last_segment(&mut out, &path);
        path.clear();
        out.push(ch);
    }
    push_last_segment(&mut out, &path);
    out
}

/// Appends the last segment of `path`, keeping a trailing `::` so that
/// `module::run::{{closure}}` shortens to `run::{{closure}}`.
fn push_last_segment(out: &mut String, path: &str) {
    let (body, separator) = path
        .strip_suffix("::")
        .map_or((path, ""), |trimmed| (trimmed, "::"));
    let segment = body.rsplit("::").next().unwrap_or_default();
    out.push_str(segment);
    out.push_str(separator);
}
