//! Deterministic health-scoring pipeline and the streaming text-generation
//! boundary it hands narrative work to.
//!
//! The pipeline itself is a rule engine: categorical self-report buckets are
//! normalized to representative numbers, checked against a fixed threshold
//! table, and aggregated into sub-scores, factor lists, and a final report.
//! Only the plan-synthesis stage leaves the process, through the
//! [`TextGenerator`] trait.

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod completeness;
pub mod config;
pub mod http_client;
pub mod normalize;
pub mod pipeline;
pub mod plan;
pub mod profile;
pub mod retry;
pub mod sanitize;
pub mod scoring;

pub use completeness::{CompletenessReport, assess};
pub use pipeline::Pipeline;
pub use plan::HealthReport;
pub use profile::HealthProfile;
pub use scoring::{HealthScores, ScoreBundle, calculate_scores};

#[derive(Debug, Error)]
pub enum WellnessError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    #[error("text generation unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("malformed generation response: {0}")]
    InvalidResponse(String),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message in the conversation sent to the text-generation capability.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Lazy, finite, non-restartable sequence of narrative text fragments.
pub type TextChunkStream = Pin<Box<dyn Stream<Item = Result<String, WellnessError>> + Send>>;

/// Boundary contract to the external text-generation capability: send an
/// ordered list of role/content messages, receive a stream of text fragments
/// the caller concatenates into the full narrative.
#[async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    async fn stream_text(&self, messages: Vec<ChatMessage>) -> Result<TextChunkStream, WellnessError>;
}
