//! Error types for St. Augustine Tonight

use thiserror::Error;

/// Result type alias for Tonight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Tonight operations
///
/// The plan parser itself never fails; these cover everything around it.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input (plan request fields, vibe names)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The generation function reported an error
    #[error("Plan generation failed: {0}")]
    Generation(String),

    /// The generation function answered with neither a plan nor an error
    #[error("No plan generated or unexpected response structure")]
    UnexpectedResponse,
}
