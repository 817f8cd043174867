use crate::aggregator::ScanResult;
use crate::cli::ScanKind;
use crate::index::{FileGroup, group_by_scope};
use crate::reporter::Reporter;
use crate::types::{ArtifactRecord, ClaudePaths, CommandRecord, Record, SettingsRecord, SubAgentRecord};
use colored::Colorize;

const PATH_DISPLAY_LEN: usize = 50;

pub struct TerminalReporter {
    paths: ClaudePaths,
    kind: ScanKind,
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(paths: ClaudePaths) -> Self {
        Self {
            paths,
            kind: ScanKind::All,
            verbose: false,
        }
    }

    pub fn with_kind(mut self, kind: ScanKind) -> Self {
        self.kind = kind;
        self
    }

    /// Show full paths and modification times.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn display_path(&self, record: &ArtifactRecord) -> String {
        if self.verbose {
            record.path.display().to_string()
        } else {
            self.paths.shorten_path(&record.path, PATH_DISPLAY_LEN)
        }
    }

    fn section<R: Record>(
        &self,
        output: &mut String,
        title: &str,
        records: &[R],
        line: impl Fn(&R) -> String,
    ) {
        output.push_str(&format!("{} ({})\n", title.bold(), records.len()));
        if records.is_empty() {
            output.push_str(&format!("  {}\n", "none".dimmed()));
        }
        for FileGroup { label, records, .. } in group_by_scope(records) {
            output.push_str(&format!("  {} ({})\n", label.cyan(), records.len()));
            for record in records {
                output.push_str(&line(record));
                if self.verbose {
                    output.push_str(&format!(
                        "      {} {}\n",
                        "modified".dimmed(),
                        record.modified_at().to_rfc3339()
                    ));
                }
            }
        }
        output.push('\n');
    }

    fn memory_line(&self, record: &ArtifactRecord) -> String {
        let local = if record.kind.is_local() {
            format!(" {}", "(local)".yellow())
        } else {
            String::new()
        };
        format!("    {}{}\n", self.display_path(record), local)
    }

    fn command_line(&self, record: &CommandRecord) -> String {
        let mut line = format!("    {}", record.invocation().green().bold());
        if record.has_args {
            line.push_str(&format!(" {}", "[args]".magenta()));
        }
        if let Some(description) = &record.description {
            line.push_str(&format!("  {}", description));
        }
        line.push('\n');
        line.push_str(&format!("      {}\n", self.display_path(&record.base).dimmed()));
        line
    }

    fn settings_line(&self, record: &SettingsRecord) -> String {
        let mut line = format!("    {}", self.display_path(&record.base));
        if record.base.kind.is_local() {
            line.push_str(&format!(" {}", "(local)".yellow()));
        }
        if !record.is_valid {
            line.push_str(&format!(" {}", "invalid JSON".red().bold()));
        }
        line.push('\n');
        line
    }

    fn subagent_line(&self, record: &SubAgentRecord) -> String {
        let mut line = format!("    {}", record.agent_name.green().bold());
        if let Some(description) = &record.description {
            line.push_str(&format!("  {}", description));
        }
        line.push('\n');
        if let Some(tools) = &record.tools {
            let tools = if tools.is_empty() {
                "none".to_string()
            } else {
                tools.join(", ")
            };
            line.push_str(&format!("      {} {}\n", "tools:".dimmed(), tools));
        }
        line.push_str(&format!("      {}\n", self.display_path(&record.base).dimmed()));
        line
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &ScanResult) -> String {
        let mut output = String::new();

        if self.kind.includes(ScanKind::Memory) {
            self.section(&mut output, "Memory files", &result.memory_files, |r| {
                self.memory_line(r)
            });
        }
        if self.kind.includes(ScanKind::Commands) {
            self.section(&mut output, "Slash commands", &result.commands, |r| {
                self.command_line(r)
            });
        }
        if self.kind.includes(ScanKind::Settings) {
            self.section(&mut output, "Settings", &result.settings, |r| {
                self.settings_line(r)
            });
        }
        if self.kind.includes(ScanKind::Agents) {
            self.section(&mut output, "Sub-agents", &result.subagents, |r| {
                self.subagent_line(r)
            });
        }

        let summary = result.summary();
        if summary.total() == 0 {
            output.push_str(&format!("{}\n", "No Claude Code artifacts found.".yellow()));
        } else {
            output.push_str(&format!(
                "{} {} artifacts ({} project, {} user)",
                "Summary:".bold(),
                summary.total(),
                summary.project,
                summary.user
            ));
            if summary.invalid_settings > 0 {
                output.push_str(&format!(
                    ", {}",
                    format!("{} invalid settings", summary.invalid_settings).red()
                ));
            }
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{sample_paths, sample_result};

    fn report(reporter: TerminalReporter) -> String {
        colored::control::set_override(false);
        reporter.report(&sample_result())
    }

    #[test]
    fn test_sections_and_groups() {
        let output = report(TerminalReporter::new(sample_paths()));

        assert!(output.contains("Memory files (2)"));
        assert!(output.contains("Slash commands (2)"));
        assert!(output.contains("Settings (2)"));
        assert!(output.contains("Sub-agents (1)"));
        assert!(output.contains("Project (1)"));
        assert!(output.contains("User (~/.claude) (1)"));
    }

    #[test]
    fn test_command_lines() {
        let output = report(TerminalReporter::new(sample_paths()));

        assert!(output.contains("/utils:foo [args]  Foo helper"));
        assert!(output.contains("/deploy  Deploy"));
        assert!(output.contains("~/.claude/commands/deploy.md"));
    }

    #[test]
    fn test_local_and_invalid_markers() {
        let output = report(TerminalReporter::new(sample_paths()));

        assert!(output.contains("~/.claude/CLAUDE.local.md (local)"));
        assert!(output.contains("~/.claude.json invalid JSON"));
        assert!(output.contains("1 invalid settings"));
    }

    #[test]
    fn test_subagent_tools() {
        let output = report(TerminalReporter::new(sample_paths()));

        assert!(output.contains("reviewer  Reviews code"));
        assert!(output.contains("tools: Read, Grep"));
    }

    #[test]
    fn test_summary_line() {
        let output = report(TerminalReporter::new(sample_paths()));
        assert!(output.contains("Summary: 7 artifacts (4 project, 3 user)"));
    }

    #[test]
    fn test_single_kind() {
        let output = report(TerminalReporter::new(sample_paths()).with_kind(ScanKind::Settings));

        assert!(output.contains("Settings (2)"));
        assert!(!output.contains("Memory files"));
        assert!(!output.contains("Slash commands"));
        assert!(!output.contains("Sub-agents"));
    }

    #[test]
    fn test_verbose_shows_full_paths() {
        let output = report(TerminalReporter::new(sample_paths()).with_verbose(true));

        assert!(output.contains("/home/alice/.claude/commands/deploy.md"));
        assert!(output.contains("modified 2026-01-25T12:00:00+00:00"));
    }

    #[test]
    fn test_empty_result() {
        colored::control::set_override(false);
        let output = TerminalReporter::new(sample_paths()).report(&ScanResult::default());

        assert!(output.contains("Memory files (0)"));
        assert!(output.contains("none"));
        assert!(output.contains("No Claude Code artifacts found."));
    }
}
