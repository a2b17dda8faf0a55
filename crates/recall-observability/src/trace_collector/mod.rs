//! Bounded, thread-safe store of retrieval traces.

mod summary;

pub use summary::TraceSummary;

use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use recall_core::config::defaults::DEFAULT_MAX_TRACES;
use recall_core::config::ObservabilityConfig;
use recall_core::errors::{RecallResult, TraceError};
use recall_core::models::RetrievalTrace;
use recall_core::traits::ITraceRecorder;

use crate::tracing_setup::events;

/// Hook fired synchronously after each trace is stored.
pub type TraceCallback =
    Box<dyn Fn(&RetrievalTrace) -> Result<(), Box<dyn Error + Send + Sync>> + Send + Sync>;

/// In-memory trace buffer with FIFO eviction.
///
/// Eviction and insertion happen under one write lock, so readers see the
/// buffer either before or after a `record`, never in between. The callback
/// runs after the lock is released.
pub struct TraceCollector {
    traces: RwLock<VecDeque<RetrievalTrace>>,
    max_traces: usize,
    callback: Option<TraceCallback>,
}

impl TraceCollector {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_TRACES)
    }

    /// Create with a custom capacity. A capacity of zero is raised to one.
    pub fn with_capacity(max_traces: usize) -> Self {
        let max_traces = max_traces.max(1);
        Self {
            traces: RwLock::new(VecDeque::with_capacity(max_traces.min(1024))),
            max_traces,
            callback: None,
        }
    }

    pub fn from_config(config: &ObservabilityConfig) -> Self {
        Self::with_capacity(config.max_traces)
    }

    /// A collector sized from `config`, or `None` when `tracing_enabled` is off.
    pub fn enabled_from_config(config: &ObservabilityConfig) -> Option<Self> {
        config.tracing_enabled.then(|| Self::from_config(config))
    }

    /// Attach a callback. Callback errors propagate out of [`record`](Self::record).
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&RetrievalTrace) -> Result<(), Box<dyn Error + Send + Sync>> + Send + Sync + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Store a trace, evicting the oldest when full, then fire the callback.
    pub fn record(&self, trace: RetrievalTrace) -> RecallResult<()> {
        let for_callback = self.callback.as_ref().map(|_| trace.clone());
        let trace_id = trace.trace_id.clone();
        let branch = trace.branch_code.map(|b| b.as_str());
        let status = if trace.is_error() { "error" } else { "ok" };

        {
            let mut traces = self.traces.write().map_err(|e| TraceError::LockPoisoned {
                reason: e.to_string(),
            })?;
            while traces.len() >= self.max_traces {
                match traces.pop_front() {
                    Some(evicted) => events::trace_evicted(&evicted.trace_id, self.max_traces),
                    None => break,
                }
            }
            traces.push_back(trace);
        }
        events::trace_recorded(&trace_id, branch, status);

        if let (Some(callback), Some(trace)) = (&self.callback, for_callback) {
            callback(&trace).map_err(|e| TraceError::CallbackFailed {
                trace_id,
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// All retained traces, oldest first.
    pub fn get_traces(&self) -> Vec<RetrievalTrace> {
        self.read().iter().cloned().collect()
    }

    pub fn get_by_id(&self, trace_id: &str) -> Option<RetrievalTrace> {
        self.read().iter().find(|t| t.trace_id == trace_id).cloned()
    }

    /// The last `n` traces, oldest first.
    pub fn get_latest(&self, n: usize) -> Vec<RetrievalTrace> {
        let traces = self.read();
        let skip = traces.len().saturating_sub(n);
        traces.iter().skip(skip).cloned().collect()
    }

    pub fn clear(&self) {
        match self.traces.write() {
            Ok(mut traces) => traces.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }

    pub fn capacity(&self) -> usize {
        self.max_traces
    }

    pub fn summary(&self) -> TraceSummary {
        TraceSummary::from_traces(self.read().iter())
    }

    /// Retained traces as a JSON array of plain objects.
    pub fn export_json(&self) -> RecallResult<serde_json::Value> {
        let traces = self.read();
        Ok(serde_json::to_value(&*traces)?)
    }

    // Every write completes its mutation before releasing, so a poisoned
    // buffer is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, VecDeque<RetrievalTrace>> {
        self.traces.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TraceCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TraceCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceCollector")
            .field("count", &self.count())
            .field("max_traces", &self.max_traces)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

impl ITraceRecorder for TraceCollector {
    fn record(&self, trace: RetrievalTrace) -> RecallResult<()> {
        TraceCollector::record(self, trace)
    }
}
