//! Error types for the reconciler and its service clients.
//!
//! The taxonomy mirrors the failure modes of one reconciliation pass:
//! transport failures, HTTP status failures, malformed response bodies,
//! invariant violations, and bad configuration. None of these are recovered
//! locally; every error aborts the pass and propagates to the process
//! boundary.

use thiserror::Error;

/// Result type alias for reconciler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for a reconciliation pass
#[derive(Error, Debug)]
pub enum Error {
    /// Request could not be sent or timed out before a response arrived
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but its status code signals failure
    #[error("HTTP status {status} from {url}")]
    Http {
        /// Response status code
        status: u16,
        /// Request URL that produced the status
        url: String,
    },

    /// Response body does not match the expected structure
    #[error("schema error: {0}")]
    Schema(String),

    /// Response is structurally valid but violates a reconciler invariant
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an HTTP status error
    pub fn http(status: u16, url: impl Into<String>) -> Self {
        Self::Http {
            status,
            url: url.into(),
        }
    }

    /// Create a schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
