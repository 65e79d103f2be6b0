//! Profile generation errors
use thiserror::Error;

/// Message shown to the user for every generation failure
pub const USER_MESSAGE: &str =
    "Failed to generate AI profile. Please try a different description or check the console.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("Upstream request failed: {0}")]
    Upstream(String),
    #[error("Malformed response: {0}")]
    Malformed(String),
    #[error("Response failed schema validation: {0}")]
    Schema(String),
    #[error("No profile matches '{0}'")]
    NoMatch(String),
}

impl GenerationError {
    /// User-displayable text; the variant detail goes to the logs
    pub fn user_message(&self) -> &'static str {
        USER_MESSAGE
    }
}
