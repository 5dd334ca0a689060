//! UI error types

use thiserror::Error;

/// Errors a page implementation can report back to the core
#[derive(Debug, Error)]
pub enum UiError {
    /// Navigation to a target failed
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
