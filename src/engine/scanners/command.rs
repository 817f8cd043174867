use crate::discovery::{COMMAND_PATTERNS, MARKDOWN_TREE_PATTERNS, ScanTargets, UserTarget};
use crate::engine::scanner::{KindScanner, MetadataExtractor};
use crate::parser::{describe, has_argument_markers};
use crate::types::{
    ArtifactKind, ArtifactRecord, ClaudePaths, CommandRecord, FileStat, derive_command_name,
    derive_namespace,
};
use std::path::Path;

const COMMAND_SIZE_LIMIT: u64 = 512 * 1024;

/// Extractor for slash-command markdown files.
pub struct CommandExtractor {
    paths: ClaudePaths,
}

pub type CommandScanner = KindScanner<CommandExtractor>;

impl MetadataExtractor for CommandExtractor {
    type Record = CommandRecord;
    const KIND: &'static str = "command";

    fn from_paths(paths: ClaudePaths) -> Self {
        Self { paths }
    }

    fn paths(&self) -> &ClaudePaths {
        &self.paths
    }

    fn size_limit(&self) -> u64 {
        COMMAND_SIZE_LIMIT
    }

    fn targets(&self) -> ScanTargets {
        ScanTargets {
            project_patterns: COMMAND_PATTERNS,
            user_targets: vec![UserTarget::tree(
                self.paths.user_commands_dir(),
                MARKDOWN_TREE_PATTERNS,
            )],
        }
    }

    fn parse_file(&self, path: &Path, content: &str, stat: FileStat) -> Option<CommandRecord> {
        let scope = self.paths.scope_of(path);
        let namespace = self
            .paths
            .commands_root_for(path)
            .and_then(|root| derive_namespace(path, &root));

        Some(CommandRecord {
            base: ArtifactRecord::new(path, ArtifactKind::command(scope), stat, scope),
            command_name: derive_command_name(path),
            namespace,
            description: describe(content),
            has_args: has_argument_markers(content),
        })
    }
}
