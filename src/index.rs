//! Cached scan results with explicit refresh.

use crate::aggregator::{Aggregator, ScanResult};
use crate::types::{
    ArtifactRecord, CommandRecord, MemoryRecord, Record, ScanOptions, Scope, SettingsRecord,
    SubAgentRecord,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Borrowed view of any record in a [`ScanResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactRef<'a> {
    Memory(&'a MemoryRecord),
    Command(&'a CommandRecord),
    Settings(&'a SettingsRecord),
    Subagent(&'a SubAgentRecord),
}

impl ArtifactRef<'_> {
    pub fn base(&self) -> &ArtifactRecord {
        match self {
            Self::Memory(r) => r.base(),
            Self::Command(r) => r.base(),
            Self::Settings(r) => r.base(),
            Self::Subagent(r) => r.base(),
        }
    }
}

impl ScanResult {
    /// Every record, kind by kind.
    pub fn artifacts(&self) -> impl Iterator<Item = ArtifactRef<'_>> {
        self.memory_files
            .iter()
            .map(ArtifactRef::Memory)
            .chain(self.commands.iter().map(ArtifactRef::Command))
            .chain(self.settings.iter().map(ArtifactRef::Settings))
            .chain(self.subagents.iter().map(ArtifactRef::Subagent))
    }
}

/// Holds the latest scan of one workspace.
///
/// Nothing is scanned until [`refresh`](ArtifactIndex::refresh) is awaited;
/// the snapshot then stays as-is until the next refresh or
/// [`invalidate`](ArtifactIndex::invalidate).
pub struct ArtifactIndex {
    aggregator: Arc<Aggregator>,
    project_root: Option<PathBuf>,
    options: ScanOptions,
    snapshot: Option<ScanResult>,
}

impl ArtifactIndex {
    pub fn new(aggregator: Arc<Aggregator>, project_root: Option<PathBuf>, options: ScanOptions) -> Self {
        Self {
            aggregator,
            project_root,
            options,
            snapshot: None,
        }
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Rescan from disk and replace the snapshot.
    pub async fn refresh(&mut self) -> &ScanResult {
        let result = self
            .aggregator
            .scan_all(self.project_root.clone(), self.options)
            .await;
        debug!(total = result.total(), "Index refreshed");
        self.snapshot.insert(result)
    }

    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    pub fn snapshot(&self) -> Option<&ScanResult> {
        self.snapshot.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The record whose path equals `path`, if the index is loaded and has one.
    pub fn find(&self, path: &Path) -> Option<ArtifactRef<'_>> {
        self.snapshot
            .as_ref()?
            .artifacts()
            .find(|artifact| artifact.base().path == path)
    }
}

/// Records of one scope, as shown under a single heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup<'a, R> {
    pub label: &'static str,
    pub scope: Scope,
    pub records: Vec<&'a R>,
}

impl<R> FileGroup<'_, R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn scope_label(scope: Scope) -> &'static str {
    match scope {
        Scope::Project => "Project",
        Scope::User => "User (~/.claude)",
    }
}

/// Split records into a project group and a user group, keeping their order.
/// Empty groups are left out.
pub fn group_by_scope<R: Record>(records: &[R]) -> Vec<FileGroup<'_, R>> {
    [Scope::Project, Scope::User]
        .into_iter()
        .map(|scope| FileGroup {
            label: scope_label(scope),
            scope,
            records: records.iter().filter(|r| r.scope() == scope).collect(),
        })
        .filter(|group| !group.is_empty())
        .collect()
}
