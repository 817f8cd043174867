use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Which artifact kinds to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ScanKind {
    #[default]
    All,
    Memory,
    Commands,
    Settings,
    Agents,
}

impl ScanKind {
    pub fn includes(&self, kind: ScanKind) -> bool {
        *self == ScanKind::All || *self == kind
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "cc-explorer",
    version,
    about = "Index Claude Code memory files, slash commands, settings, and sub-agents",
    long_about = "cc-explorer finds the CLAUDE.md memory files, slash commands, settings files, and sub-agent definitions in a project and in ~/.claude, and lists them with their metadata."
)]
pub struct Cli {
    /// Project directory to scan (defaults to the current directory)
    pub project: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Artifact kind to list
    #[arg(short, long, value_enum, default_value_t = ScanKind::All)]
    pub kind: ScanKind,

    /// Include hidden files and directories
    #[arg(long)]
    pub include_hidden: bool,

    /// Only look at the top level of the project directory
    #[arg(long)]
    pub no_recursive: bool,

    /// Skip the project directory and list user-level artifacts only
    #[arg(long, conflicts_with = "project")]
    pub no_project: bool,

    /// Config file to use instead of the usual lookup
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
