//! Error types for the API client.

use crate::validation::ValidationErrors;

/// Errors that can occur when building, sending or decoding an API request.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request failed client-side validation and was never sent.
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationErrors),
    /// A `{placeholder}` in the path template had no matching path parameter.
    #[error("Unresolved path placeholder in {0}")]
    UnresolvedPath(String),
    /// The HTTP round-trip itself failed (connect, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body did not match the expected result shape.
    #[error("Failed to parse response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// A request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A server-supplied link points outside the configured API origin.
    #[error("Refusing to follow link to foreign origin: {0}")]
    ForeignLink(url::Url),
    /// Client configuration is missing or malformed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
