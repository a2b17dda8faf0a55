// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_MODE: &str = "balanced";

// --- Routing ---
pub const DEFAULT_DEGRADED_FALLBACK: bool = true;

// --- Rerank ---
pub const DEFAULT_NATIVE_RERANK_PROVIDERS: &[&str] = &["mem0"];

// --- Branching ---
pub const DEFAULT_CHANNEL_FLOOR: f64 = 0.3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TRACING_ENABLED: bool = false;
pub const DEFAULT_MAX_TRACES: usize = 1_000;
pub const DEFAULT_ERROR_MESSAGE_MAX_CHARS: usize = 200;
