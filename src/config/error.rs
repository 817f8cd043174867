//! Errors raised while loading a config file.

use std::fmt;
use std::path::PathBuf;

/// Serialization format of a config file, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but does not deserialize into a [`Config`](super::Config).
    #[error("Invalid {format} in config file {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        format: ConfigFormat,
        message: String,
    },

    #[error("Config file {} has no supported extension (yaml, yml, json, toml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

impl ConfigError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::UnsupportedFormat(path) => {
                path
            }
        }
    }
}
