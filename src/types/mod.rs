//! Core data types: artifact records, scan options, and the path resolver.

mod paths;
mod record;

pub use paths::{
    AGENTS_DIR_NAME, COMMANDS_DIR_NAME, CONFIG_DIR_NAME, ClaudePaths, derive_command_name,
    derive_namespace, is_local_variant, normalize_path,
};
pub use record::{
    ArtifactKind, ArtifactRecord, CommandRecord, FileStat, MemoryRecord, Record, ScanOptions,
    Scope, SettingsRecord, SubAgentRecord,
};
