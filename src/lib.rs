pub mod aggregator;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod index;
pub mod parser;
pub mod reporter;
pub mod run;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use aggregator::{Aggregator, ScanResult, Summary};
pub use cli::{Cli, OutputFormat, ScanKind};
pub use config::{Config, ConfigError};
pub use engine::{
    CommandScanner, KindScanner, MemoryScanner, MetadataExtractor, ScannerConfig,
    SettingsScanner, SubagentScanner,
};
pub use error::{AppError, Result};
pub use index::{ArtifactIndex, ArtifactRef, FileGroup, group_by_scope};
pub use reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
pub use types::{
    ArtifactKind, ArtifactRecord, ClaudePaths, CommandRecord, MemoryRecord, Record, ScanOptions,
    Scope, SettingsRecord, SubAgentRecord,
};
