//! Error handling for ActivityBoard
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the ActivityBoard crate
#[derive(Error, Debug)]
pub enum ActivityBoardError {
    #[error("Activities API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Activities API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("activities API request failed: {0}")]
    RequestFailed(String),

    #[error("activities API timeout")]
    Timeout,

    #[error("activities API unavailable")]
    ServiceUnavailable,

    #[error("invalid activities API response: {0}")]
    InvalidResponse(String),

    /// The backend answered with a non-success status and a parseable body.
    /// `detail` is the only error text ever shown verbatim to the user.
    #[error("request rejected: {}", .detail.as_deref().unwrap_or("no detail provided"))]
    Rejected { detail: Option<String> },
}

/// Result type alias for ActivityBoard operations
pub type Result<T> = std::result::Result<T, ActivityBoardError>;
