//! Rerank policy and the built-in reranker.

mod policy;
mod term_overlap;

pub use policy::{bypass_reasons, RerankPolicyGuard};
pub use term_overlap::TermOverlapReranker;
