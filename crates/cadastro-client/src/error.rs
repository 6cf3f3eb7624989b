//! Document store client error types.
//!
//! One taxonomy for the whole write path. Callers log these and map them
//! to the generic failure outcome — nothing downstream branches on the
//! specific variant.

/// Errors from document store calls.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP transport error (connection, TLS, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The store returned a non-2xx status.
    #[error("document store {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
