use crate::aggregator::ScanResult;
use crate::cli::{Cli, OutputFormat};
use crate::reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
use crate::run::run_scan;
use crate::types::ClaudePaths;
use std::process::ExitCode;
use tracing::{debug, error};

pub fn format_result(cli: &Cli, paths: &ClaudePaths, result: &ScanResult) -> String {
    match cli.format {
        OutputFormat::Terminal => TerminalReporter::new(paths.clone())
            .with_kind(cli.kind)
            .with_verbose(cli.verbose)
            .report(result),
        OutputFormat::Json => JsonReporter::new().with_kind(cli.kind).report(result),
    }
}

pub fn run_normal_mode(cli: &Cli) -> ExitCode {
    let paths = ClaudePaths::detect();
    match run_scan(cli, &paths) {
        Ok(result) => {
            println!("{}", format_result(cli, &paths, &result));
            debug!(total = result.total(), "Scan completed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Scan failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
