use crate::discovery::{
    SETTINGS_FILE_NAMES, SETTINGS_PATTERNS, ScanTargets, USER_CONFIG_FILE_NAME, UserTarget,
};
use crate::engine::scanner::{KindScanner, MetadataExtractor};
use crate::parser::JsonParser;
use crate::types::{
    ArtifactKind, ArtifactRecord, ClaudePaths, FileStat, Scope, SettingsRecord, is_local_variant,
};
use std::path::Path;
use tracing::warn;

const SETTINGS_SIZE_LIMIT: u64 = 1024 * 1024;

/// Extractor for `settings.json`, `settings.local.json` and `~/.claude.json`.
pub struct SettingsExtractor {
    paths: ClaudePaths,
}

pub type SettingsScanner = KindScanner<SettingsExtractor>;

impl MetadataExtractor for SettingsExtractor {
    type Record = SettingsRecord;
    const KIND: &'static str = "settings";

    fn from_paths(paths: ClaudePaths) -> Self {
        Self { paths }
    }

    fn paths(&self) -> &ClaudePaths {
        &self.paths
    }

    fn size_limit(&self) -> u64 {
        SETTINGS_SIZE_LIMIT
    }

    fn targets(&self) -> ScanTargets {
        let config_root = self.paths.config_root();
        let mut user_targets: Vec<UserTarget> = SETTINGS_FILE_NAMES
            .iter()
            .map(|name| UserTarget::file(config_root.join(name)))
            .collect();
        user_targets.push(UserTarget::file(self.paths.user_config_file()));

        ScanTargets {
            project_patterns: SETTINGS_PATTERNS,
            user_targets,
        }
    }

    fn parse_file(&self, path: &Path, content: &str, stat: FileStat) -> Option<SettingsRecord> {
        let is_valid = JsonParser::is_valid(content);
        if !is_valid {
            warn!(path = %path.display(), "Settings file is not valid JSON");
        }

        let is_user_config = path
            .file_name()
            .is_some_and(|name| name == USER_CONFIG_FILE_NAME);
        let (kind, scope) = if is_user_config {
            (ArtifactKind::UserConfig, Scope::User)
        } else {
            let scope = self.paths.scope_of(path);
            (ArtifactKind::settings(scope, is_local_variant(path)), scope)
        };

        Some(SettingsRecord {
            base: ArtifactRecord::new(path, kind, stat, scope),
            is_valid,
        })
    }
}
