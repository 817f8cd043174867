//! Metadata extractors, one per artifact kind.
//!
//! Available scanners:
//! - `MemoryScanner` - `CLAUDE.md` and `CLAUDE.local.md`
//! - `CommandScanner` - slash-command markdown files
//! - `SettingsScanner` - `settings*.json` and `~/.claude.json`
//! - `SubagentScanner` - sub-agent definitions under `.claude/agents`

pub mod command;
pub mod error;
pub mod memory;
pub mod settings;
pub mod subagent;

pub use command::{CommandExtractor, CommandScanner};
pub use error::ExtractError;
pub use memory::{MemoryExtractor, MemoryScanner};
pub use settings::{SettingsExtractor, SettingsScanner};
pub use subagent::{AgentFrontmatter, SubagentExtractor, SubagentScanner};
