//! Recognised media suffixes and the playable-file predicate.
//!
//! Matching is a plain byte suffix compare, ASCII case folded. It is not
//! path-aware: `clip.MP4` matches `.mp4`, `clip.mp4x` does not.

use std::ffi::OsStr;

use serde::{Deserialize, Serialize};

/// Compiled-in suffixes.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".mp4", ".mkv", ".webm", ".m4v", ".wmv", ".avi", ".mpg", ".mpeg", ".flv", ".sfv",
];

/// Immutable list of suffixes, compared ignoring ASCII case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionSet(Vec<String>);

impl ExtensionSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(extensions.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `name` ends with one of the configured suffixes.
    pub fn matches(&self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref().as_encoded_bytes();
        self.0.iter().any(|ext| ends_with_ignore_ascii_case(name, ext.as_bytes()))
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().copied())
    }
}

fn ends_with_ignore_ascii_case(name: &[u8], suffix: &[u8]) -> bool {
    if name.len() < suffix.len() {
        return false;
    }
    name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
