mod embedder;
mod provider;
mod reranker;
mod trace_recorder;

pub use embedder::IQueryEmbedder;
pub use provider::IMemoryProvider;
pub use reranker::IReranker;
pub use trace_recorder::ITraceRecorder;
