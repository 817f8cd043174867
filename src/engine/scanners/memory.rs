use crate::discovery::{MEMORY_FILE_NAMES, MEMORY_PATTERNS, ScanTargets, UserTarget};
use crate::engine::scanner::{KindScanner, MetadataExtractor};
use crate::types::{ArtifactKind, ArtifactRecord, ClaudePaths, FileStat, MemoryRecord, is_local_variant};
use std::path::Path;

const MEMORY_SIZE_LIMIT: u64 = 1024 * 1024;

/// Extractor for `CLAUDE.md` / `CLAUDE.local.md` memory files.
pub struct MemoryExtractor {
    paths: ClaudePaths,
}

pub type MemoryScanner = KindScanner<MemoryExtractor>;

impl MetadataExtractor for MemoryExtractor {
    type Record = MemoryRecord;
    const KIND: &'static str = "memory";

    fn from_paths(paths: ClaudePaths) -> Self {
        Self { paths }
    }

    fn paths(&self) -> &ClaudePaths {
        &self.paths
    }

    fn size_limit(&self) -> u64 {
        MEMORY_SIZE_LIMIT
    }

    fn targets(&self) -> ScanTargets {
        let config_root = self.paths.config_root();
        ScanTargets {
            project_patterns: MEMORY_PATTERNS,
            user_targets: MEMORY_FILE_NAMES
                .iter()
                .map(|name| UserTarget::file(config_root.join(name)))
                .collect(),
        }
    }

    fn parse_file(&self, path: &Path, _content: &str, stat: FileStat) -> Option<MemoryRecord> {
        let scope = self.paths.scope_of(path);
        let kind = ArtifactKind::memory(scope, is_local_variant(path));
        Some(ArtifactRecord::new(path, kind, stat, scope))
    }
}
