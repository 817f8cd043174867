//! Per-file extraction errors.
//!
//! These never leave a scanner: each one turns into "no record" plus a log
//! line.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("File too large: {path} ({size} bytes, limit {limit})")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Failed to stat file: {path}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Path is not a file: {0}")]
    NotAFile(PathBuf),
}

impl ExtractError {
    pub fn too_large(path: impl Into<PathBuf>, size: u64, limit: u64) -> Self {
        Self::TooLarge {
            path: path.into(),
            size,
            limit,
        }
    }

    pub fn stat(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Stat {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn encoding(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::Encoding {
            path: path.into(),
            source,
        }
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotAFile(path.into())
    }
}
