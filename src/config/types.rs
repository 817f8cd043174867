//! Configuration type definitions.

use crate::engine::ScannerConfig;
use crate::types::ScanOptions;
use serde::{Deserialize, Serialize};

/// Main configuration structure for cc-explorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
}

/// Scan defaults. Unset fields fall back to [`ScanOptions::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub include_hidden: Option<bool>,
    pub recursive: Option<bool>,
    /// Directory names skipped on top of `node_modules` and `.git`.
    pub exclude_dirs: Vec<String>,
}

impl Config {
    /// Scan options with the configured values applied over the defaults.
    pub fn scan_options(&self) -> ScanOptions {
        let defaults = ScanOptions::default();
        ScanOptions::new()
            .with_include_hidden(self.scan.include_hidden.unwrap_or(defaults.include_hidden))
            .with_recursive(self.scan.recursive.unwrap_or(defaults.recursive))
    }

    pub fn scanner_config(&self) -> ScannerConfig {
        ScannerConfig::new().with_excluded_dirs(self.scan.exclude_dirs.iter().cloned())
    }
}
