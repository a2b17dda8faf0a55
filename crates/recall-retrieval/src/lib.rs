//! # recall-retrieval
//!
//! Turns a [`RetrievalRequest`](recall_core::RetrievalRequest) into exactly one
//! [`RetrievalResponse`](recall_core::RetrievalResponse):
//!
//! ```text
//! request ─► router ─► provider.search ─► normalize ─► rerank guard ─► branch engine ─► response
//!               │                                                                         │
//!               └── none ──────────────────────────────────────────► EMPTY_SET ───────────┘
//! ```
//!
//! The router and branch engine are pure functions over their inputs. The
//! orchestrator is the only component that talks to collaborators.

pub mod branch;
pub mod orchestrator;
pub mod rerank;
pub mod router;

pub use branch::BranchEngine;
pub use orchestrator::{RetrievalOrchestrator, RetrievalOrchestratorBuilder};
pub use rerank::{RerankPolicyGuard, TermOverlapReranker};
pub use router::RetrievalRouter;
