use crate::discovery::{MARKDOWN_TREE_PATTERNS, SUBAGENT_PATTERNS, ScanTargets, UserTarget};
use crate::engine::scanner::{KindScanner, MetadataExtractor};
use crate::parser::{FrontmatterParser, first_heading, first_text_line, truncate_description};
use crate::types::{ArtifactKind, ArtifactRecord, ClaudePaths, FileStat, SubAgentRecord};
use serde_yaml::Value;
use std::path::Path;

const SUBAGENT_SIZE_LIMIT: u64 = 100 * 1024;

/// Metadata declared in a sub-agent's front-matter block.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AgentFrontmatter {
    pub description: Option<String>,
    pub tools: Option<Vec<String>>,
}

impl AgentFrontmatter {
    /// Parse a front-matter block. YAML is tried first; blocks that are not
    /// valid YAML (unquoted colons in a description are common) fall back to a
    /// line scan.
    pub fn parse(block: &str) -> Self {
        Self::from_yaml(block).unwrap_or_else(|| Self::from_lines(block))
    }

    fn from_yaml(block: &str) -> Option<Self> {
        let value: Value = serde_yaml::from_str(block).ok()?;
        let mapping = value.as_mapping()?;

        let description = mapping
            .get("description")
            .and_then(scalar_to_string)
            .map(|d| strip_quotes(d.trim()).to_string())
            .filter(|d| !d.is_empty());

        let tools = mapping.get("tools").map(|value| match value {
            Value::Sequence(items) => clean_tools(items.iter().filter_map(scalar_to_string)),
            Value::Null => Vec::new(),
            other => scalar_to_string(other)
                .map(|s| clean_tools(s.split(',').map(str::to_string)))
                .unwrap_or_default(),
        });

        Some(Self { description, tools })
    }

    fn from_lines(block: &str) -> Self {
        let lines: Vec<&str> = block.lines().collect();

        let description = lines
            .iter()
            .find_map(|line| line.trim_start().strip_prefix("description:"))
            .map(|value| strip_quotes(value.trim()).to_string())
            .filter(|d| !d.is_empty());

        let tools = lines
            .iter()
            .position(|line| line.trim_start().starts_with("tools:"))
            .map(|idx| {
                let rest = lines[idx].trim_start()["tools:".len()..].trim();
                if let Some(inline) = rest.strip_prefix('[') {
                    let inline = inline.split(']').next().unwrap_or_default();
                    clean_tools(inline.split(',').map(str::to_string))
                } else if !rest.is_empty() {
                    clean_tools(rest.split(',').map(str::to_string))
                } else {
                    let items = lines[idx + 1..]
                        .iter()
                        .map(|line| line.trim())
                        .take_while(|line| line.starts_with('-'))
                        .map(|line| line.trim_start_matches('-').to_string());
                    clean_tools(items)
                }
            });

        Self { description, tools }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '\'')
}

fn clean_tools(items: impl IntoIterator<Item = String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().replace(['"', '\''], ""))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Extractor for sub-agent definitions under `.claude/agents/`.
pub struct SubagentExtractor {
    paths: ClaudePaths,
}

pub type SubagentScanner = KindScanner<SubagentExtractor>;

impl MetadataExtractor for SubagentExtractor {
    type Record = SubAgentRecord;
    const KIND: &'static str = "subagent";

    fn from_paths(paths: ClaudePaths) -> Self {
        Self { paths }
    }

    fn paths(&self) -> &ClaudePaths {
        &self.paths
    }

    fn size_limit(&self) -> u64 {
        SUBAGENT_SIZE_LIMIT
    }

    fn targets(&self) -> ScanTargets {
        ScanTargets {
            project_patterns: SUBAGENT_PATTERNS,
            user_targets: vec![UserTarget::tree(
                self.paths.user_agents_dir(),
                MARKDOWN_TREE_PATTERNS,
            )],
        }
    }

    fn parse_file(&self, path: &Path, content: &str, stat: FileStat) -> Option<SubAgentRecord> {
        let scope = self.paths.scope_of(path);
        let agent_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let frontmatter = FrontmatterParser::extract(content)
            .map(AgentFrontmatter::parse)
            .unwrap_or_default();

        let description = frontmatter
            .description
            .or_else(|| {
                first_heading(content)
                    .or_else(|| {
                        first_text_line(FrontmatterParser::body(content), &["#", "<!--", "---"])
                    })
                    .map(str::to_string)
            })
            .map(|d| truncate_description(&d));

        Some(SubAgentRecord {
            base: ArtifactRecord::new(path, ArtifactKind::subagent(scope), stat, scope),
            agent_name,
            description,
            tools: frontmatter.tools,
        })
    }
}
