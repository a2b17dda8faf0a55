//! Retrieval data model: request, candidates, packets, next actions, traces.

mod branch;
mod candidate;
mod mode;
mod packet;
mod provider;
mod request;
mod rerank;
mod routing;
mod trace;

pub use branch::{ActionKind, BranchCode};
pub use candidate::{ContextCandidate, Metadata, ProviderResult};
pub use mode::RetrievalMode;
pub use packet::{ConfidenceSummary, ContextPacket, NextAction, RetrievalResponse};
pub use provider::{FeatureFlags, ProviderHealth, ProviderId, ProviderResponse, ProviderStatusMap};
pub use request::{RetrievalRequest, RetrievalRequestBuilder};
pub use rerank::{RerankMetadata, RerankType};
pub use routing::{RouteOptions, RouteTarget, RoutingMetadata};
pub use trace::{duration_ms, RetrievalTrace, TraceStatus};
