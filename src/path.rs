//! Canonical path form and directory-token conversion.
//!
//! A canonical path starts with `/` and never ends with `/`, except the root
//! path `/` itself. A directory token is one `/`-delimited segment of a path,
//! re-prefixed with `/` (so `/a/b/c` splits into `["/a", "/b", "/c"]`).
//!
//! Resolution consumes one directory token per router level and rejoins the
//! remainder with [`to_path`] before descending, so these three functions
//! must round-trip: `to_path(&to_directories(&clean(p))) == clean(p)`.

/// Normalize a path to canonical form.
///
/// The root path `/` is returned unchanged. Any other path gets a leading `/`
/// prepended if missing and exactly one trailing `/` stripped if present.
/// Idempotent: `clean(&clean(p)) == clean(p)`.
#[must_use]
pub fn clean(path: &str) -> String {
    if path == "/" {
        return path.to_string();
    }
    let mut path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    if path.ends_with('/') {
        path.pop();
    }
    path
}

/// Split a path into directory tokens.
///
/// The root path `/` yields `["/"]`. Any other path is split on `/`, empty
/// tokens are discarded, and each remaining token is re-prefixed with `/`.
#[must_use]
pub fn to_directories(path: &str) -> Vec<String> {
    if path == "/" {
        return vec!["/".to_string()];
    }
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("/{segment}"))
        .collect()
}

/// Rejoin directory tokens into a path.
///
/// Concatenates the tokens and prepends a `/` if the result lacks one, so an
/// empty slice yields the root path `/`.
#[must_use]
pub fn to_path<S: AsRef<str>>(directories: &[S]) -> String {
    let path: String = directories.iter().map(AsRef::as_ref).collect();
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}
