//! Error types for sitegraph
//!
//! A backend query failure is fatal for the whole sourcing run; per-field
//! faults are handled locally in the transformer and never surface here.

use thiserror::Error;

/// Result type alias for sitegraph operations
pub type Result<T> = std::result::Result<T, SitegraphError>;

/// Main error type for sitegraph
#[derive(Error, Debug)]
pub enum SitegraphError {
    /// HTTP request to the backend failed
    #[error("Backend request failed: {0}. Check the server URL and your network connection.")]
    Http(#[from] reqwest::Error),

    /// Backend response could not be decoded
    #[error("Failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Backend rejected a class query
    #[error("Query for class '{class}' failed with status {status}")]
    Query { class: String, status: u16 },

    /// Two models derive the same external type name
    #[error("Models '{first}' and '{second}' both derive type name '{type_name}'. Rename one model or change the type-name prefix.")]
    DuplicateTypeName {
        type_name: String,
        first: String,
        second: String,
    },

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables.")]
    Config(String),

    /// The host node store rejected a node
    #[error("Node store rejected node: {0}")]
    Sink(String),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SitegraphError {
    /// Create a query error
    pub fn query(class: impl Into<String>, status: u16) -> Self {
        Self::Query {
            class: class.into(),
            status,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a node store error
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}
