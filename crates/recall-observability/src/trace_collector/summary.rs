use std::collections::BTreeMap;

use recall_core::models::RetrievalTrace;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over the retained traces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceSummary {
    pub count: usize,
    pub error_count: usize,
    /// Traces per branch code; error traces carry no branch and are not counted.
    pub branch_counts: BTreeMap<String, usize>,
    pub avg_duration_ms: f64,
    pub p95_duration_ms: f64,
}

impl TraceSummary {
    pub fn from_traces<'a>(traces: impl IntoIterator<Item = &'a RetrievalTrace>) -> Self {
        let mut summary = Self::default();
        let mut durations = Vec::new();
        for trace in traces {
            summary.count += 1;
            if trace.is_error() {
                summary.error_count += 1;
            }
            if let Some(branch) = trace.branch_code {
                *summary
                    .branch_counts
                    .entry(branch.as_str().to_string())
                    .or_default() += 1;
            }
            durations.push(trace.duration_ms);
        }
        if !durations.is_empty() {
            summary.avg_duration_ms = durations.iter().sum::<f64>() / durations.len() as f64;
            summary.p95_duration_ms = percentile(&mut durations, 0.95);
        }
        summary
    }

    /// Fraction of traces with error status.
    pub fn error_rate(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.error_count as f64 / self.count as f64
    }
}

/// Nearest-rank percentile (`p` in 0.0–1.0) of a non-empty sample.
fn percentile(values: &mut [f64], p: f64) -> f64 {
    values.sort_by(f64::total_cmp);
    let idx = ((p * (values.len() - 1) as f64).round() as usize).min(values.len() - 1);
    values[idx]
}
