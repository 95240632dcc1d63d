//! Serving-path registry
//!
//! Answers "is this request path servable?" with exact matching after
//! trailing-slash normalization.

use std::collections::HashSet;

/// The set of configured serving paths.
///
/// Built once at startup from the comma-separated path spec and shared
/// read-only across all connection tasks; no synchronization needed.
#[derive(Debug, Clone)]
pub struct PathRegistry {
    paths: HashSet<String>,
}

impl PathRegistry {
    pub fn new(paths: &[String]) -> Self {
        Self {
            paths: paths.iter().cloned().collect(),
        }
    }

    /// Check whether a request path is servable.
    ///
    /// A path matches when it equals a registered path exactly, or when it
    /// equals one after stripping all trailing `/` characters. A registered
    /// `/foo` serves `/foo` and `/foo/`, but never `/foo/bar`.
    pub fn is_served(&self, path: &str) -> bool {
        self.paths.contains(path) || self.paths.contains(path.trim_end_matches('/'))
    }
}
