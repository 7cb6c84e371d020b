//! Error types for the Seek client.

use thiserror::Error;

/// A shared error type for the entire Seek client.
///
/// Submission failures (`Validation`, `Backend`, `Transport`) only end the
/// submission that raised them; `Config` is raised at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeekError {
    /// The submitted query was empty or whitespace only.
    #[error("Please enter a query before searching.")]
    Validation,

    /// The backend answered with a non-200 status.
    #[error("Error: {status}, Unable to retrieve the answer.")]
    Backend { status: u16 },

    /// Network failure, timeout, or an unreadable response body.
    #[error("An error occurred while accessing the backend: {0}")]
    Transport(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SeekError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Backend error from a raw status code
    pub fn backend(status: u16) -> Self {
        Self::Backend { status }
    }

    /// Creates a Transport error
    pub fn transport(description: impl Into<String>) -> Self {
        Self::Transport(description.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation)
    }

    /// Check if this is a backend status error
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. })
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns the HTTP status carried by a `Backend` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<reqwest::Error> for SeekError {
    fn from(err: reqwest::Error) -> Self {
        // Display omits the source chain, e.g. "Connection refused".
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Transport(message)
    }
}

impl From<serde_json::Error> for SeekError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("invalid JSON response: {}", err))
    }
}

/// A type alias for `Result<T, SeekError>`.
pub type Result<T> = std::result::Result<T, SeekError>;
