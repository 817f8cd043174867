//! Extractor trait and the generic per-kind scanner.
//!
//! This module provides:
//! - `MetadataExtractor` trait, one implementation per artifact kind
//! - `ScannerConfig` for settings shared by every scanner
//! - `KindScanner`, which pairs the file matcher with an extractor
//! - `read_bounded` for size-capped file reads

use super::scanners::ExtractError;
use crate::discovery::{EXCLUDED_DIRS, FileMatcher, ScanTargets, UserTarget};
use crate::types::{ClaudePaths, FileStat, Record, ScanOptions};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Turns one file on disk into a typed record.
///
/// Implementations decide where their kind lives ([`targets`]), how large a
/// file may be, and what metadata to pull from its content.
///
/// [`targets`]: MetadataExtractor::targets
pub trait MetadataExtractor: Send + Sync {
    type Record: Record + Send + 'static;

    /// Short name used in log lines.
    const KIND: &'static str;

    fn from_paths(paths: ClaudePaths) -> Self
    where
        Self: Sized;

    fn paths(&self) -> &ClaudePaths;

    /// Files larger than this many bytes are skipped.
    fn size_limit(&self) -> u64;

    fn targets(&self) -> ScanTargets;

    /// Build a record from already-read content. `None` means the file is
    /// not an artifact of this kind after all.
    fn parse_file(&self, path: &Path, content: &str, stat: FileStat) -> Option<Self::Record>;
}

/// Read a file as UTF-8, refusing anything over `limit` bytes.
///
/// The read itself is capped, so a file that grows after the size check still
/// cannot be loaded past the limit.
pub fn read_bounded(path: &Path, limit: u64) -> Result<(String, FileStat), ExtractError> {
    let metadata = fs::metadata(path).map_err(|e| ExtractError::stat(path, e))?;
    if !metadata.is_file() {
        return Err(ExtractError::not_a_file(path));
    }
    if metadata.len() > limit {
        return Err(ExtractError::too_large(path, metadata.len(), limit));
    }

    trace!(path = %path.display(), "Reading file");
    let file = File::open(path).map_err(|e| ExtractError::read(path, e))?;
    let mut bytes = Vec::with_capacity(metadata.len() as usize);
    file.take(limit + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ExtractError::read(path, e))?;

    if bytes.len() as u64 > limit {
        return Err(ExtractError::too_large(path, bytes.len() as u64, limit));
    }

    let content = String::from_utf8(bytes).map_err(|e| ExtractError::encoding(path, e))?;
    Ok((content, FileStat::from_metadata(&metadata)))
}

/// Settings shared by all scanners.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    excluded_dirs: Vec<String>,
}

impl ScannerConfig {
    pub fn new() -> Self {
        Self {
            excluded_dirs: EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Directory names never descended into, on top of the built-in ones.
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

    pub fn excluded_dirs(&self) -> &[String] {
        &self.excluded_dirs
    }

    /// Run the file matcher for `patterns` below `root`.
    pub fn find(&self, root: &Path, patterns: &[&str], options: &ScanOptions) -> Vec<PathBuf> {
        match FileMatcher::new(patterns) {
            Ok(matcher) => matcher
                .with_excluded_dirs(self.excluded_dirs.iter().cloned())
                .find(root, options),
            Err(e) => {
                warn!(root = %root.display(), error = %e, "Unusable file patterns");
                Vec::new()
            }
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Scanner for one artifact kind: matcher plus extractor.
pub struct KindScanner<E> {
    extractor: E,
    config: ScannerConfig,
}

impl<E: MetadataExtractor> KindScanner<E> {
    pub fn new(paths: ClaudePaths) -> Self {
        Self::with_extractor(E::from_paths(paths))
    }

    pub fn with_extractor(extractor: E) -> Self {
        Self {
            extractor,
            config: ScannerConfig::new(),
        }
    }

    pub fn with_config(mut self, config: ScannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Collect every artifact of this kind.
    ///
    /// The project root (when given and non-empty) is searched first, then
    /// the user-level targets. Each path appears once, keeping its first
    /// occurrence, and the result is ordered newest first. Never fails:
    /// anything unreadable is skipped.
    pub fn scan(&self, project_root: Option<&Path>, options: &ScanOptions) -> Vec<E::Record> {
        let targets = self.extractor.targets();
        let mut candidates = Vec::new();

        if let Some(root) = project_root.filter(|r| !r.as_os_str().is_empty()) {
            let found = self.config.find(root, targets.project_patterns, options);
            debug!(kind = E::KIND, root = %root.display(), count = found.len(), "Project files matched");
            candidates.extend(found);
        }

        for target in &targets.user_targets {
            match target {
                UserTarget::File(path) => {
                    if path.is_file() {
                        candidates.push(path.clone());
                    } else {
                        trace!(path = %path.display(), "User file not present");
                    }
                }
                UserTarget::Tree { root, patterns } => {
                    candidates.extend(self.config.find(root, patterns, options));
                }
            }
        }

        let mut seen = HashSet::new();
        candidates.retain(|path| seen.insert(path.clone()));

        let mut records: Vec<E::Record> = candidates
            .par_iter()
            .filter_map(|path| self.extract(path))
            .collect();

        records.sort_by(|a, b| b.modified_at().cmp(&a.modified_at()));
        debug!(kind = E::KIND, count = records.len(), "Scan complete");
        records
    }

    /// Read and parse a single file. Errors are logged and yield `None`.
    pub fn extract(&self, path: &Path) -> Option<E::Record> {
        match read_bounded(path, self.extractor.size_limit()) {
            Ok((content, stat)) => self.extractor.parse_file(path, &content, stat),
            Err(e) => {
                debug!(kind = E::KIND, path = %path.display(), error = %e, "Skipping file");
                None
            }
        }
    }
}
