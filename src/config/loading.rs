//! Configuration loading functions.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::{ConfigError, ConfigFormat};
use super::types::Config;

/// Project-level config file names, in lookup order.
pub const PROJECT_CONFIG_FILES: &[&str] = &[
    ".cc-explorer.yaml",
    ".cc-explorer.yml",
    ".cc-explorer.json",
    ".cc-explorer.toml",
];

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> Result<Config, String> {
        match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl Config {
    /// Load one config file, choosing the format from its extension.
    ///
    /// The extension is checked before the file is opened, so an unsupported
    /// name fails without touching the disk.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        format.parse(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            format,
            message,
        })
    }

    /// `<config dir>/cc-explorer/config.yaml`, if the platform has a config dir.
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cc-explorer").join("config.yaml"))
    }

    /// Load configuration from the project directory or global config.
    ///
    /// Search order:
    /// 1. `.cc-explorer.yaml` in project root
    /// 2. `.cc-explorer.yml` in project root
    /// 3. `.cc-explorer.json` in project root
    /// 4. `.cc-explorer.toml` in project root
    /// 5. `~/.config/cc-explorer/config.yaml`
    /// 6. Default configuration
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn load(project_root: Option<&Path>) -> Self {
        Self::load_from(project_root, Self::global_path().as_deref())
    }

    pub fn load_from(project_root: Option<&Path>, global: Option<&Path>) -> Self {
        let project_candidates = project_root
            .into_iter()
            .flat_map(|root| PROJECT_CONFIG_FILES.iter().map(move |name| root.join(name)));

        for path in project_candidates.chain(global.map(Path::to_path_buf)) {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config");
                    return config;
                }
                Err(e) => warn!(path = %e.path().display(), error = %e, "Ignoring config file"),
            }
        }

        Self::default()
    }
}
