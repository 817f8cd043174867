use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Project directory not found: {0}")]
    ProjectNotFound(PathBuf),

    #[error("Failed to start async runtime")]
    Runtime(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
