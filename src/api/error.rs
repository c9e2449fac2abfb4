//! Fetch error type shared by every property source
//!
//! The UI treats all of these the same way: the `Display` text is shown
//! verbatim in a toast and the store keeps its last good state.

use crate::model::PropertyId;
use thiserror::Error;

/// Message used when a source fails without anything more specific to say
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// A failed call to the data collaborator
#[derive(Debug, Error)]
pub enum FetchError {
    /// Generic failure reported by the source itself
    #[error("{0}")]
    Unexpected(String),

    /// Detail lookup for an id the source does not know
    #[error("Property {0} not found")]
    NotFound(PropertyId),

    /// The request never produced a usable response (connect, timeout, decode)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status; shown as the server's message
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl FetchError {
    pub fn unexpected() -> Self {
        Self::Unexpected(UNEXPECTED_ERROR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(
            FetchError::unexpected().to_string(),
            "An unexpected error occurred"
        );
        assert_eq!(
            FetchError::NotFound(PropertyId::new("p-42")).to_string(),
            "Property p-42 not found"
        );
        assert_eq!(
            FetchError::Status {
                status: 503,
                message: "Service unavailable".to_string()
            }
            .to_string(),
            "Service unavailable"
        );
    }
}
