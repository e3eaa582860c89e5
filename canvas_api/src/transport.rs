//! The seam between endpoints and the HTTP stack.

#![allow(async_fn_in_trait)]

use crate::{endpoint::HttpRequest, response::RawResponse, Error};

/// Sends one [`HttpRequest`] and returns the fully read response.
///
/// Implementations turn non-success statuses into [`Error::HttpStatus`] and
/// fill [`RawResponse::links`] from the `Link` header. [`crate::Client`] is the
/// reqwest-backed implementation.
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, Error>;
}
