use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::AppError;

/// Namespace used when a display name reduces to nothing usable.
pub const FALLBACK_NAMESPACE: &str = "mc-dynamite";

/// A validated package-style namespace.
///
/// Guarantees the npm package name grammar: an optional `@scope/` prefix
/// followed by a name of lowercase alphanumerics, `-`, `.`, `_` or `~`,
/// where the name does not start with `.` or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Validate and create a new instance.
    pub fn new(value: &str) -> Result<Self, AppError> {
        if is_valid_package_name(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(AppError::InvalidNamespace(value.to_string()))
        }
    }

    /// Derive a namespace from free text. Never fails.
    pub fn derive(display_name: &str) -> Self {
        Self(to_valid_package_name(display_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Output directory, relative to the working directory.
    ///
    /// Scoped namespaces (`@scope/name`) map to a nested directory.
    pub fn dir_path(&self) -> PathBuf {
        self.0.split('/').collect()
    }
}

impl std::ops::Deref for Namespace {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Namespace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Namespace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Namespace::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Check `value` against `^(?:@[a-z0-9-*~][a-z0-9-*._~]*/)?[a-z0-9-~][a-z0-9-._~]*$`.
pub fn is_valid_package_name(value: &str) -> bool {
    let name = match value.strip_prefix('@') {
        Some(rest) => {
            let Some((scope, name)) = rest.split_once('/') else {
                return false;
            };
            if !is_valid_scope(scope) {
                return false;
            }
            name
        }
        None => value,
    };

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(is_name_char),
        _ => false,
    }
}

/// Turn arbitrary text into a valid package name.
///
/// Valid input is returned unchanged, which makes the derivation idempotent.
/// Otherwise the text is trimmed and lower-cased, whitespace runs become `-`,
/// leading `.`/`_` are stripped and every run of characters other than
/// lowercase alphanumerics, `-` and `~` becomes a single `-`.
pub fn to_valid_package_name(value: &str) -> String {
    if is_valid_package_name(value) {
        return value.to_string();
    }

    let lowered = value.trim().to_lowercase();
    let hyphenated = collapse_runs(&lowered, char::is_whitespace);
    let stripped = hyphenated.trim_start_matches(['.', '_']);
    let derived = collapse_runs(stripped, |c| !is_name_start(c));

    if derived.is_empty() { FALLBACK_NAMESPACE.to_string() } else { derived }
}

fn collapse_runs(value: &str, matches: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_run = false;
    for c in value.chars() {
        if matches(c) {
            if !in_run {
                out.push('-');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn is_valid_scope(scope: &str) -> bool {
    let mut chars = scope.chars();
    match chars.next() {
        Some(first) if is_name_start(first) || first == '*' => {
            chars.all(|c| is_name_char(c) || c == '*')
        }
        _ => false,
    }
}

/// Also the whole alphabet of derived names.
fn is_name_start(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '~'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c == '.' || c == '_'
}
