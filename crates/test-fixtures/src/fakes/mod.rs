//! Deterministic fake collaborators.

mod embedders;
mod providers;
mod rerankers;

pub use embedders::{FailingEmbedder, HashEmbedder};
pub use providers::{ScriptedProvider, SearchCall};
pub use rerankers::{
    BlankingReranker, FailingReranker, GrowingReranker, NanReranker, ReversingReranker,
};
