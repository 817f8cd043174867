//! Fixed glob patterns and well-known file names for each artifact kind.

/// Memory files anywhere in the project.
pub const MEMORY_PATTERNS: &[&str] = &["**/CLAUDE.md", "**/CLAUDE.local.md"];

/// Memory files probed directly under `~/.claude`.
pub const MEMORY_FILE_NAMES: &[&str] = &["CLAUDE.md", "CLAUDE.local.md"];

/// Slash-command definitions, both under `.claude/commands` and a bare
/// `commands/` directory (plugin layout).
pub const COMMAND_PATTERNS: &[&str] = &["**/.claude/commands/**/*.md", "**/commands/**/*.md"];

pub const SETTINGS_PATTERNS: &[&str] = &["**/.claude/settings.json", "**/.claude/settings.local.json"];

/// Settings files probed directly under `~/.claude`.
pub const SETTINGS_FILE_NAMES: &[&str] = &["settings.json", "settings.local.json"];

/// File name of the legacy user-level config that lives directly in the home
/// directory.
pub const USER_CONFIG_FILE_NAME: &str = ".claude.json";

pub const SUBAGENT_PATTERNS: &[&str] = &["**/.claude/agents/**/*.md"];

/// Everything markdown below a user-level directory such as `~/.claude/commands`.
pub const MARKDOWN_TREE_PATTERNS: &[&str] = &["**/*.md"];
