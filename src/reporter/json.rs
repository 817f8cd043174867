use crate::aggregator::ScanResult;
use crate::cli::ScanKind;
use crate::reporter::Reporter;

pub struct JsonReporter {
    kind: ScanKind,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self {
            kind: ScanKind::All,
        }
    }

    /// Emit only the list for `kind` instead of the whole result.
    pub fn with_kind(mut self, kind: ScanKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, result: &ScanResult) -> String {
        let serialized = match self.kind {
            ScanKind::All => serde_json::to_string_pretty(result),
            ScanKind::Memory => serde_json::to_string_pretty(&result.memory_files),
            ScanKind::Commands => serde_json::to_string_pretty(&result.commands),
            ScanKind::Settings => serde_json::to_string_pretty(&result.settings),
            ScanKind::Agents => serde_json::to_string_pretty(&result.subagents),
        };
        serialized
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize result: {}"}}"#, e))
    }
}
