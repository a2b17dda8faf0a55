//! # recall-core
//!
//! Foundation crate for the recall retrieval orchestrator.
//! Defines the retrieval data model, branch codes, collaborator traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RecallConfig;
pub use errors::{RecallError, RecallResult};
pub use models::{
    ActionKind, BranchCode, ContextCandidate, ContextPacket, NextAction, ProviderId,
    RetrievalMode, RetrievalRequest, RetrievalResponse, RetrievalTrace,
};
