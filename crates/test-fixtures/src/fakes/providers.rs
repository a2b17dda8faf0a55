use std::sync::Mutex;

use recall_core::models::{ProviderId, ProviderResponse, ProviderResult};
use recall_core::traits::IMemoryProvider;

/// Arguments of one `search` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCall {
    pub embedding_len: usize,
    pub top_k: usize,
    pub threshold: f64,
    pub filter_type: Option<String>,
}

/// Provider that returns a fixed response and records every call.
pub struct ScriptedProvider {
    id: ProviderId,
    response: ProviderResponse,
    calls: Mutex<Vec<SearchCall>>,
}

impl ScriptedProvider {
    pub fn new(id: ProviderId, results: Vec<ProviderResult>) -> Self {
        Self::with_response(id, ProviderResponse::ok(results))
    }

    /// Provider that fails internally and reports `reason`.
    pub fn degraded(id: ProviderId, reason: &str) -> Self {
        Self::with_response(id, ProviderResponse::degraded(reason))
    }

    pub fn with_response(id: ProviderId, response: ProviderResponse) -> Self {
        Self {
            id,
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<SearchCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl IMemoryProvider for ScriptedProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
        threshold: f64,
        filter_type: Option<&str>,
    ) -> ProviderResponse {
        self.calls.lock().unwrap().push(SearchCall {
            embedding_len: query_embedding.len(),
            top_k,
            threshold,
            filter_type: filter_type.map(str::to_string),
        });
        self.response.clone()
    }
}
