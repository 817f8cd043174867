//! Where each scanner looks.

use std::path::PathBuf;

/// A location under the user's home that a scanner probes directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserTarget {
    /// A single well-known file, existence-checked on its own.
    File(PathBuf),
    /// A directory searched with the file matcher.
    Tree {
        root: PathBuf,
        patterns: &'static [&'static str],
    },
}

impl UserTarget {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn tree(root: impl Into<PathBuf>, patterns: &'static [&'static str]) -> Self {
        Self::Tree {
            root: root.into(),
            patterns,
        }
    }
}

/// The complete set of places one artifact kind is collected from.
#[derive(Debug, Clone)]
pub struct ScanTargets {
    /// Patterns evaluated relative to the project root.
    pub project_patterns: &'static [&'static str],
    /// Probed in order after the project search.
    pub user_targets: Vec<UserTarget>,
}
