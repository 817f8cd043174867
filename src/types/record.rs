//! Artifact records produced by a single scan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Whether an artifact belongs to the current project or to the user's
/// global configuration under `~/.claude`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Project,
    User,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Project => "project",
            Scope::User => "user",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type of a tracked artifact. Combines the artifact family with its scope
/// and, where it applies, the `.local` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// `CLAUDE.md` inside the project
    ProjectMemory,
    /// `CLAUDE.local.md` inside the project
    ProjectMemoryLocal,
    /// `~/.claude/CLAUDE.md`
    UserMemory,
    /// `~/.claude/CLAUDE.local.md`
    UserMemoryLocal,
    ProjectCommand,
    UserCommand,
    /// `.claude/settings.json` inside the project
    ProjectSettings,
    /// `.claude/settings.local.json` inside the project
    ProjectSettingsLocal,
    UserSettings,
    UserSettingsLocal,
    /// Legacy `~/.claude.json`
    UserConfig,
    ProjectSubagent,
    UserSubagent,
}

impl ArtifactKind {
    pub fn memory(scope: Scope, local: bool) -> Self {
        match (scope, local) {
            (Scope::Project, false) => Self::ProjectMemory,
            (Scope::Project, true) => Self::ProjectMemoryLocal,
            (Scope::User, false) => Self::UserMemory,
            (Scope::User, true) => Self::UserMemoryLocal,
        }
    }

    pub fn command(scope: Scope) -> Self {
        match scope {
            Scope::Project => Self::ProjectCommand,
            Scope::User => Self::UserCommand,
        }
    }

    pub fn settings(scope: Scope, local: bool) -> Self {
        match (scope, local) {
            (Scope::Project, false) => Self::ProjectSettings,
            (Scope::Project, true) => Self::ProjectSettingsLocal,
            (Scope::User, false) => Self::UserSettings,
            (Scope::User, true) => Self::UserSettingsLocal,
        }
    }

    pub fn subagent(scope: Scope) -> Self {
        match scope {
            Scope::Project => Self::ProjectSubagent,
            Scope::User => Self::UserSubagent,
        }
    }

    /// Returns true for the `.local` variants that are normally kept out of
    /// version control.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::ProjectMemoryLocal
                | Self::UserMemoryLocal
                | Self::ProjectSettingsLocal
                | Self::UserSettingsLocal
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectMemory => "project-memory",
            Self::ProjectMemoryLocal => "project-memory-local",
            Self::UserMemory => "user-memory",
            Self::UserMemoryLocal => "user-memory-local",
            Self::ProjectCommand => "project-command",
            Self::UserCommand => "user-command",
            Self::ProjectSettings => "project-settings",
            Self::ProjectSettingsLocal => "project-settings-local",
            Self::UserSettings => "user-settings",
            Self::UserSettingsLocal => "user-settings-local",
            Self::UserConfig => "user-config",
            Self::ProjectSubagent => "project-subagent",
            Self::UserSubagent => "user-subagent",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size and modification time of a file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size: u64,
    pub modified_at: DateTime<Utc>,
}

impl FileStat {
    pub fn from_metadata(metadata: &Metadata) -> Self {
        // Platforms without mtime support sort these last.
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        Self {
            size: metadata.len(),
            modified_at: DateTime::<Utc>::from(modified),
        }
    }
}

/// Fields shared by every artifact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRecord {
    /// Absolute path, unique within one scan.
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub size: u64,
    pub modified_at: DateTime<Utc>,
    pub scope: Scope,
}

impl ArtifactRecord {
    pub fn new(path: impl Into<PathBuf>, kind: ArtifactKind, stat: FileStat, scope: Scope) -> Self {
        Self {
            path: path.into(),
            kind,
            size: stat.size,
            modified_at: stat.modified_at,
            scope,
        }
    }
}

/// A memory file (`CLAUDE.md` / `CLAUDE.local.md`) carries only the base fields.
pub type MemoryRecord = ArtifactRecord;

/// A slash-command definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRecord {
    #[serde(flatten)]
    pub base: ArtifactRecord,
    pub command_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub has_args: bool,
}

impl CommandRecord {
    /// The name as typed in Claude Code, e.g. `/utils:foo` or `/deploy`.
    pub fn invocation(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("/{}:{}", ns.replace('/', ":"), self.command_name),
            None => format!("/{}", self.command_name),
        }
    }
}

/// A settings file; malformed JSON is kept with `is_valid == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    #[serde(flatten)]
    pub base: ArtifactRecord,
    pub is_valid: bool,
}

/// A sub-agent definition under `.claude/agents/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAgentRecord {
    #[serde(flatten)]
    pub base: ArtifactRecord,
    pub agent_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
}

/// Access to the shared base fields of any record type.
pub trait Record {
    fn base(&self) -> &ArtifactRecord;

    fn path(&self) -> &Path {
        &self.base().path
    }

    fn modified_at(&self) -> DateTime<Utc> {
        self.base().modified_at
    }

    fn scope(&self) -> Scope {
        self.base().scope
    }
}

impl Record for ArtifactRecord {
    fn base(&self) -> &ArtifactRecord {
        self
    }
}

impl Record for CommandRecord {
    fn base(&self) -> &ArtifactRecord {
        &self.base
    }
}

impl Record for SettingsRecord {
    fn base(&self) -> &ArtifactRecord {
        &self.base
    }
}

impl Record for SubAgentRecord {
    fn base(&self) -> &ArtifactRecord {
        &self.base
    }
}

/// Options recognized by every scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Consider entries whose name starts with `.` (beyond those named
    /// literally in a pattern).
    pub include_hidden: bool,
    /// Descend below the root directory.
    pub recursive: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// `None` means unlimited depth.
    pub fn max_depth(&self) -> Option<usize> {
        if self.recursive { None } else { Some(1) }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include_hidden: false,
            recursive: true,
        }
    }
}
