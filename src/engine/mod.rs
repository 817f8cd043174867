//! Scanning engine.
//!
//! This module provides:
//! - The `MetadataExtractor` trait and the generic `KindScanner`
//! - Bounded file reads
//! - One extractor per artifact kind
//!
//! Scanners take candidate paths from the discovery layer and produce typed
//! records for the aggregator.

pub mod scanner;
pub mod scanners;

pub use scanner::{KindScanner, MetadataExtractor, ScannerConfig, read_bounded};
pub use scanners::{
    AgentFrontmatter, CommandExtractor, CommandScanner, ExtractError, MemoryExtractor,
    MemoryScanner, SettingsExtractor, SettingsScanner, SubagentExtractor, SubagentScanner,
};
