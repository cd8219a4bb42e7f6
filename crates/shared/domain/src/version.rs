//! Version labels derived from source-control branch names.

use serde::Serialize;
use std::fmt;

/// A sanitized version label.
///
/// Only contains characters from `[A-Za-z0-9_.-]`. An empty label means
/// "no version" and callers must skip publishing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionLabel(String);

impl VersionLabel {
    /// Derives a label from a raw branch name, e.g. `feature/Fix-123` -> `feature_Fix-123`.
    #[must_use]
    pub fn derive(branch: &str) -> Self {
        Self(derive_version(branch))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps `/` to `_`, then drops every character outside `[A-Za-z0-9_.-]`.
#[must_use]
pub fn derive_version(branch: &str) -> String {
    branch.chars().map(|c| if c == '/' { '_' } else { c }).filter(|&c| is_label_char(c)).collect()
}

/// Returns `true` for characters allowed in a version label.
#[must_use]
pub const fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}
