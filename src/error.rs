//! Error types for Farmdash.

use thiserror::Error;

/// Errors returned by the decision functions.
///
/// Every failure is detected before any random draw is made, so an error
/// never leaves a partially built report behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// An input was unrecognized or out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DashboardError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!(%message, "rejected input");
        DashboardError::InvalidInput(message)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DashboardError>;
