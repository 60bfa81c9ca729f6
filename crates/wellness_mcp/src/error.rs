//! Custom error types for the MCP server.

use thiserror::Error;

/// MCP server errors.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("pipeline error: {0}")]
    Pipeline(#[from] wellness_core::WellnessError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for McpError {
    fn from(err: String) -> Self {
        McpError::Internal(err)
    }
}

impl From<McpError> for String {
    fn from(err: McpError) -> Self {
        err.to_string()
    }
}

/// Result type alias for MCP operations.
pub type McpResult<T> = Result<T, McpError>;
