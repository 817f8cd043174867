//! Aggregation layer.
//!
//! Runs the four kind scanners side by side and gathers their records into a
//! single `ScanResult`.

pub mod summary;

pub use summary::Summary;

use crate::engine::{
    CommandScanner, KindScanner, MemoryScanner, MetadataExtractor, ScannerConfig,
    SettingsScanner, SubagentScanner,
};
use crate::types::{
    ClaudePaths, CommandRecord, MemoryRecord, ScanOptions, SettingsRecord, SubAgentRecord,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error};

/// Everything found by one scan, one list per kind, each newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub memory_files: Vec<MemoryRecord>,
    pub commands: Vec<CommandRecord>,
    pub settings: Vec<SettingsRecord>,
    pub subagents: Vec<SubAgentRecord>,
}

impl ScanResult {
    pub fn total(&self) -> usize {
        self.memory_files.len() + self.commands.len() + self.settings.len() + self.subagents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn summary(&self) -> Summary {
        Summary::from_result(self)
    }
}

/// Owns one scanner per kind and fans a scan out across them.
pub struct Aggregator {
    paths: ClaudePaths,
    memory: Arc<MemoryScanner>,
    commands: Arc<CommandScanner>,
    settings: Arc<SettingsScanner>,
    subagents: Arc<SubagentScanner>,
}

impl Aggregator {
    pub fn new(paths: ClaudePaths) -> Self {
        Self::with_config(paths, ScannerConfig::new())
    }

    pub fn with_config(paths: ClaudePaths, config: ScannerConfig) -> Self {
        Self {
            memory: Arc::new(MemoryScanner::new(paths.clone()).with_config(config.clone())),
            commands: Arc::new(CommandScanner::new(paths.clone()).with_config(config.clone())),
            settings: Arc::new(SettingsScanner::new(paths.clone()).with_config(config.clone())),
            subagents: Arc::new(SubagentScanner::new(paths.clone()).with_config(config)),
            paths,
        }
    }

    pub fn paths(&self) -> &ClaudePaths {
        &self.paths
    }

    /// Scan every kind concurrently.
    ///
    /// Each scanner runs on its own blocking task; the call returns once all
    /// four finish. A scanner that panics contributes an empty list.
    pub async fn scan_all(&self, project_root: Option<PathBuf>, options: ScanOptions) -> ScanResult {
        debug!(
            project = ?project_root,
            include_hidden = options.include_hidden,
            recursive = options.recursive,
            "Starting scan"
        );

        let (memory_files, commands, settings, subagents) = tokio::join!(
            run_blocking(Arc::clone(&self.memory), project_root.clone(), options),
            run_blocking(Arc::clone(&self.commands), project_root.clone(), options),
            run_blocking(Arc::clone(&self.settings), project_root.clone(), options),
            run_blocking(Arc::clone(&self.subagents), project_root, options),
        );

        let result = ScanResult {
            memory_files,
            commands,
            settings,
            subagents,
        };
        debug!(total = result.total(), "Scan finished");
        result
    }
}

async fn run_blocking<E>(
    scanner: Arc<KindScanner<E>>,
    project_root: Option<PathBuf>,
    options: ScanOptions,
) -> Vec<E::Record>
where
    E: MetadataExtractor + 'static,
{
    let task = tokio::task::spawn_blocking(move || scanner.scan(project_root.as_deref(), &options));
    match task.await {
        Ok(records) => records,
        Err(e) => {
            error!(kind = E::KIND, error = %e, "Scan task failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{ScanTargets, UserTarget};
    use crate::test_utils::fixtures::{Workspace, set_mtime};
    use crate::types::{ArtifactRecord, FileStat, Scope};
    use std::path::Path;

    #[tokio::test]
    async fn test_scan_all_collects_every_kind() {
        let ws = Workspace::new();
        ws.write_project("CLAUDE.md", "# Project memory");
        ws.write_project(".claude/commands/build.md", "# Build\nUsage: /build [target]");
        ws.write_project(".claude/settings.json", "{}");
        ws.write_project(".claude/agents/tester.md", "---\ntools: [Bash]\n---\n# Tester");
        ws.write_user(".claude/commands/deploy.md", "# Deploy");

        let aggregator = Aggregator::new(ws.paths());
        let result = aggregator
            .scan_all(Some(ws.project_root().to_path_buf()), ScanOptions::default())
            .await;

        assert_eq!(result.memory_files.len(), 1);
        assert_eq!(result.commands.len(), 2);
        assert_eq!(result.settings.len(), 1);
        assert_eq!(result.subagents.len(), 1);
        assert_eq!(result.total(), 5);
        assert!(!result.is_empty());
    }

    #[tokio::test]
    async fn test_scan_all_without_project_root() {
        let ws = Workspace::new();
        ws.write_project("CLAUDE.md", "# ignored without a project root");
        ws.write_user(".claude/CLAUDE.md", "# Global");

        let aggregator = Aggregator::new(ws.paths());
        let result = aggregator.scan_all(None, ScanOptions::default()).await;

        assert_eq!(result.memory_files.len(), 1);
        assert_eq!(result.memory_files[0].scope, Scope::User);
        assert_eq!(result.total(), 1);
    }

    #[tokio::test]
    async fn test_scan_all_empty() {
        let ws = Workspace::new();
        let aggregator = Aggregator::new(ws.paths());
        let result = aggregator
            .scan_all(Some(ws.project_root().to_path_buf()), ScanOptions::default())
            .await;
        assert!(result.is_empty());
        assert_eq!(result, ScanResult::default());
    }

    #[tokio::test]
    async fn test_scan_all_respects_extra_excluded_dirs() {
        let ws = Workspace::new();
        ws.write_project("vendor/CLAUDE.md", "# vendored");
        ws.write_project("CLAUDE.md", "# root");

        let config = ScannerConfig::new().with_excluded_dirs(["vendor"]);
        let aggregator = Aggregator::with_config(ws.paths(), config);
        let result = aggregator
            .scan_all(Some(ws.project_root().to_path_buf()), ScanOptions::default())
            .await;

        assert_eq!(result.memory_files.len(), 1);
    }

    #[tokio::test]
    async fn test_results_sorted_newest_first() {
        let ws = Workspace::new();
        let older = ws.write_project("a/CLAUDE.md", "# a");
        let newer = ws.write_project("b/CLAUDE.md", "# b");
        set_mtime(&older, 100);
        set_mtime(&newer, 200);

        let aggregator = Aggregator::new(ws.paths());
        let result = aggregator
            .scan_all(Some(ws.project_root().to_path_buf()), ScanOptions::default())
            .await;

        assert_eq!(result.memory_files[0].path, newer);
        assert_eq!(result.memory_files[1].path, older);
    }

    struct PanickingExtractor {
        paths: ClaudePaths,
    }

    impl MetadataExtractor for PanickingExtractor {
        type Record = ArtifactRecord;
        const KIND: &'static str = "panicking";

        fn from_paths(paths: ClaudePaths) -> Self {
            Self { paths }
        }

        fn paths(&self) -> &ClaudePaths {
            &self.paths
        }

        fn size_limit(&self) -> u64 {
            1024
        }

        fn targets(&self) -> ScanTargets {
            ScanTargets {
                project_patterns: &["*.md"],
                user_targets: Vec::<UserTarget>::new(),
            }
        }

        fn parse_file(&self, _path: &Path, _content: &str, _stat: FileStat) -> Option<ArtifactRecord> {
            panic!("extractor failure");
        }
    }

    #[tokio::test]
    async fn test_panicking_scanner_yields_empty_list() {
        let ws = Workspace::new();
        ws.write_project("boom.md", "# boom");

        let scanner = Arc::new(KindScanner::<PanickingExtractor>::new(ws.paths()));
        let records =
            run_blocking(scanner, Some(ws.project_root().to_path_buf()), ScanOptions::default())
                .await;

        assert!(records.is_empty());
    }
}
