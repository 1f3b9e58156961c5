// src/error.rs
// =============================================================================
// Typed errors for everything that can go wrong while talking to GitHub.
//
// The application layer (main.rs, prompts, clipboard) uses anyhow::Result,
// but the GitHub side returns FetchError so callers can tell a bad URL from
// a network failure from a 404.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display for our enum
// - #[from]: lets the ? operator convert reqwest errors automatically
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The user typed something we can't use (bad URL, unknown language)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The request never completed (DNS, connection refused, TLS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// GitHub answered, but not with a 2xx status
    #[error("GitHub returned HTTP {status} for {url}")]
    Remote { status: StatusCode, url: String },

    /// GitHub answered 2xx but the body wasn't the JSON we expected
    #[error("Unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        FetchError::InvalidInput(message.into())
    }
}
