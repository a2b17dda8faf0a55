use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RequestError;

/// Latency/precision tradeoff requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalMode {
    /// Lowest latency. Slow providers are not eligible.
    Quick,
    #[default]
    Balanced,
    /// Prefers providers that get an external rerank pass.
    Precise,
}

impl RetrievalMode {
    pub const ALL: [RetrievalMode; 3] = [Self::Quick, Self::Balanced, Self::Precise];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Balanced => "balanced",
            Self::Precise => "precise",
        }
    }
}

impl fmt::Display for RetrievalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RetrievalMode {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick" => Ok(Self::Quick),
            "balanced" => Ok(Self::Balanced),
            "precise" => Ok(Self::Precise),
            other => Err(RequestError::UnknownMode {
                mode: other.to_string(),
            }),
        }
    }
}
