//! Machine-readable result reports.

use std::time::Duration;

use serde::Serialize;

use bigchunk_core::Magnitude;

/// JSON report for one operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationReport {
    pub operation: String,
    pub base: u64,
    pub base_width: usize,
    pub result: String,
    pub digits: usize,
    pub chunk_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<u64>>,
    pub elapsed_us: u128,
}

impl OperationReport {
    /// Build a report for `value`, including raw chunks when `raw` is set.
    #[must_use]
    pub fn new(operation: &str, value: &Magnitude, decimal: &str, elapsed: Duration, raw: bool) -> Self {
        let radix = value.radix();
        Self {
            operation: operation.to_string(),
            base: radix.base(),
            base_width: radix.width(),
            result: decimal.to_string(),
            digits: decimal.len(),
            chunk_count: value.len(),
            chunks: raw.then(|| value.chunks().to_vec()),
            elapsed_us: elapsed.as_micros(),
        }
    }

    /// Serialize as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
