//! Discovery layer: finds candidate artifact files on disk.
//!
//! This module handles:
//! - Glob matching below a root directory
//! - Hidden-entry, recursion and noise-directory filtering
//! - The fixed per-kind pattern tables and user-level probe targets

pub mod patterns;
pub mod targets;
pub mod walker;

pub use patterns::{
    COMMAND_PATTERNS, MARKDOWN_TREE_PATTERNS, MEMORY_FILE_NAMES, MEMORY_PATTERNS,
    SETTINGS_FILE_NAMES, SETTINGS_PATTERNS, SUBAGENT_PATTERNS, USER_CONFIG_FILE_NAME,
};
pub use targets::{ScanTargets, UserTarget};
pub use walker::{EXCLUDED_DIRS, FileMatcher, MatchError};
