//! Scan orchestration for the binary: project root, config, options.

use crate::aggregator::{Aggregator, ScanResult};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::types::{ClaudePaths, ScanOptions, normalize_path};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The directory to treat as the project, or `None` for a user-only scan.
pub fn resolve_project_root(cli: &Cli) -> Result<Option<PathBuf>> {
    if cli.no_project {
        return Ok(None);
    }

    let root = cli.project.clone().unwrap_or_else(|| PathBuf::from("."));
    if !root.is_dir() {
        return Err(AppError::ProjectNotFound(root));
    }
    let root = std::path::absolute(&root).unwrap_or(root);
    Ok(Some(normalize_path(&root)))
}

/// An explicit `--config` file must load; otherwise the usual lookup applies.
pub fn load_config(cli: &Cli, project_root: Option<&Path>) -> Result<Config> {
    match &cli.config {
        Some(path) => Ok(Config::from_file(path)?),
        None => Ok(Config::load(project_root)),
    }
}

/// Config values over the defaults, CLI flags over both.
pub fn effective_options(cli: &Cli, config: &Config) -> ScanOptions {
    let mut options = config.scan_options();
    if cli.include_hidden {
        options = options.with_include_hidden(true);
    }
    if cli.no_recursive {
        options = options.with_recursive(false);
    }
    options
}

pub fn run_scan(cli: &Cli, paths: &ClaudePaths) -> Result<ScanResult> {
    let project_root = resolve_project_root(cli)?;
    let config = load_config(cli, project_root.as_deref())?;
    let options = effective_options(cli, &config);
    debug!(project = ?project_root, ?options, "Resolved scan settings");

    let aggregator = Aggregator::with_config(paths.clone(), config.scanner_config());
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;

    Ok(runtime.block_on(aggregator.scan_all(project_root, options)))
}
