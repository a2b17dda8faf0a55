use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RequestError;

/// Terminal outcome of one retrieval, evaluated in declaration order.
///
/// Serialized as the stable upper-case constants so consumers can switch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BranchCode {
    EmptySet,
    LowConfidence,
    ChannelMismatch,
    RerankBypassed,
    #[serde(alias = "OK")]
    Success,
}

impl BranchCode {
    /// All codes in evaluation order.
    pub const ALL: [BranchCode; 5] = [
        Self::EmptySet,
        Self::LowConfidence,
        Self::ChannelMismatch,
        Self::RerankBypassed,
        Self::Success,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptySet => "EMPTY_SET",
            Self::LowConfidence => "LOW_CONFIDENCE",
            Self::ChannelMismatch => "CHANNEL_MISMATCH",
            Self::RerankBypassed => "RERANK_BYPASSED",
            Self::Success => "SUCCESS",
        }
    }

    /// Degraded branches carry a `fallback_reason` on their packet.
    pub fn is_degraded(self) -> bool {
        matches!(
            self,
            Self::EmptySet | Self::LowConfidence | Self::ChannelMismatch
        )
    }
}

impl fmt::Display for BranchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BranchCode {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMPTY_SET" => Ok(Self::EmptySet),
            "LOW_CONFIDENCE" => Ok(Self::LowConfidence),
            "CHANNEL_MISMATCH" => Ok(Self::ChannelMismatch),
            "RERANK_BYPASSED" => Ok(Self::RerankBypassed),
            "SUCCESS" | "OK" => Ok(Self::Success),
            other => Err(RequestError::UnknownBranch {
                code: other.to_string(),
            }),
        }
    }
}

/// What the caller should do next. Planners branch on this, never on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Answer,
    Clarify,
    BroadenQuery,
    SwitchMode,
    RequestSignal,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Answer => "answer",
            Self::Clarify => "clarify",
            Self::BroadenQuery => "broaden_query",
            Self::SwitchMode => "switch_mode",
            Self::RequestSignal => "request_signal",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
