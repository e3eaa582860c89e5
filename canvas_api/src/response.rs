//! Raw transport responses and the decoders endpoints build their results from.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::{
    paging::{PageLinks, Paged},
    Error,
};

/// A fully read HTTP response plus the pagination links from its headers.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
    pub links: PageLinks,
}

impl RawResponse {
    /// A 200 response with a body and no headers.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            ..Self::default()
        }
    }

    /// Decodes the body as a single JSON value of type `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str::<T>(&self.body).map_err(|e| {
            let snippet = truncate_body(&self.body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode {
                source: e,
                body: snippet,
            }
        })
    }

    /// Decodes a JSON array body and keeps the response's page links.
    pub fn paged<T: DeserializeOwned>(self) -> Result<Paged<T>, Error> {
        let items = self.json::<Vec<T>>()?;
        Ok(Paged {
            items,
            links: self.links,
        })
    }

    /// Whether the trimmed body text is exactly `expected`.
    pub fn literal(&self, expected: &str) -> bool {
        self.body.trim() == expected
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
