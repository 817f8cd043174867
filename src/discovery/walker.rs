//! Glob-driven file matching over a directory tree.

use crate::types::{ScanOptions, normalize_path};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Directories that are never descended into, whatever the options say.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git"];

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] globset::Error),
}

/// Finds files below a root whose root-relative path matches any of a set of
/// glob patterns.
///
/// `*` never crosses a `/`; `**/` matches zero or more directories. Symbolic
/// links are neither followed nor returned.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    glob_set: GlobSet,
    /// Hidden names spelled out in a pattern (e.g. `.claude`), which stay
    /// reachable when hidden entries are otherwise skipped.
    literal_hidden: HashSet<String>,
    excluded_dirs: Vec<String>,
}

impl FileMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, MatchError> {
        let mut builder = GlobSetBuilder::new();
        let mut literal_hidden = HashSet::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder.add(GlobBuilder::new(pattern).literal_separator(true).build()?);

            for segment in pattern.split('/') {
                if segment.starts_with('.') && !segment.contains(['*', '?', '[', '{']) {
                    literal_hidden.insert(segment.to_string());
                }
            }
        }

        Ok(Self {
            glob_set: builder.build()?,
            literal_hidden,
            excluded_dirs: EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        })
    }

    /// Add directory names to skip on top of [`EXCLUDED_DIRS`].
    pub fn with_excluded_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dir in dirs {
            let dir = dir.into();
            if !self.excluded_dirs.contains(&dir) {
                self.excluded_dirs.push(dir);
            }
        }
        self
    }

    /// Check a root-relative path against the patterns.
    pub fn matches(&self, relative: &Path) -> bool {
        let normalized: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        self.glob_set.is_match(normalized.join("/"))
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && self
                .excluded_dirs
                .iter()
                .any(|d| entry.file_name().to_str() == Some(d.as_str()))
    }

    fn is_hidden_and_skipped(&self, entry: &DirEntry, options: &ScanOptions) -> bool {
        if options.include_hidden {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') && !self.literal_hidden.contains(name.as_ref())
    }

    /// Walk `root` and return the absolute paths of matching files, ordered
    /// by traversal with siblings sorted by name.
    ///
    /// A missing or unreadable root yields an empty list; unreadable entries
    /// below it are skipped.
    pub fn find(&self, root: &Path, options: &ScanOptions) -> Vec<PathBuf> {
        let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        let root = normalize_path(&absolute);
        trace!(root = %root.display(), "Matching files");

        let mut walker = WalkDir::new(&root).follow_links(false).sort_by_file_name();
        if let Some(depth) = options.max_depth() {
            walker = walker.max_depth(depth);
        }

        let mut files = Vec::new();
        let entries = walker.into_iter().filter_entry(|e| {
            e.depth() == 0 || !(self.is_excluded_dir(e) || self.is_hidden_and_skipped(e, options))
        });

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(root = %root.display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&root) else {
                continue;
            };
            if self.matches(relative) {
                trace!(path = %entry.path().display(), "Matched");
                files.push(entry.into_path());
            }
        }

        files
    }
}
