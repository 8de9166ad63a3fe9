//! Error types used throughout the application

use thiserror::Error;

/// Main error type for hourbridge
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Login was rejected with HTTP 401.
    #[error("Invalid credentials. Please check your email and password.")]
    InvalidCredentials,

    /// Login failed with a status other than 200 or 401.
    #[error("Authentication failed (HTTP {status})")]
    AuthFailed { status: u16 },

    /// Token refresh failed with a status other than 200 or 401. A 401 is
    /// not an error: it surfaces as `RefreshOutcome::NeedsReauth` instead.
    #[error("Token refresh failed (HTTP {status})")]
    RefreshFailed { status: u16 },

    /// The remote service answered with a status the caller does not handle.
    #[error("Remote call failed (HTTP {status}): {body}")]
    Remote { status: u16, body: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for hourbridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
