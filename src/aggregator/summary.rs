//! Per-kind and per-scope counts for a scan result.

use super::ScanResult;
use crate::types::{Record, Scope};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub memory_files: usize,
    pub commands: usize,
    pub settings: usize,
    /// Settings files whose content is not valid JSON.
    pub invalid_settings: usize,
    pub subagents: usize,
    pub project: usize,
    pub user: usize,
}

impl Summary {
    pub fn from_result(result: &ScanResult) -> Self {
        let scopes = result
            .memory_files
            .iter()
            .map(Record::scope)
            .chain(result.commands.iter().map(Record::scope))
            .chain(result.settings.iter().map(Record::scope))
            .chain(result.subagents.iter().map(Record::scope));

        let (mut project, mut user) = (0, 0);
        for scope in scopes {
            match scope {
                Scope::Project => project += 1,
                Scope::User => user += 1,
            }
        }

        Self {
            memory_files: result.memory_files.len(),
            commands: result.commands.len(),
            settings: result.settings.len(),
            invalid_settings: result.settings.iter().filter(|s| !s.is_valid).count(),
            subagents: result.subagents.len(),
            project,
            user,
        }
    }

    pub fn total(&self) -> usize {
        self.project + self.user
    }
}
