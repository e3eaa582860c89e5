//! Link-header pagination.
//!
//! List endpoints answer with one page and a `Link` header naming the
//! `current`, `next`, `prev`, `first` and `last` pages as absolute URLs.

use reqwest::header::{HeaderMap, LINK};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{endpoint::HttpRequest, transport::Transport, Error};

/// Page URLs parsed from a response's `Link` header(s).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub current: Option<Url>,
    pub next: Option<Url>,
    pub prev: Option<Url>,
    pub first: Option<Url>,
    pub last: Option<Url>,
}

impl PageLinks {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut links = Self::default();
        for value in headers.get_all(LINK) {
            match value.to_str() {
                Ok(value) => links.merge(value),
                Err(_) => tracing::warn!("Ignoring non-ASCII Link header"),
            }
        }
        links
    }

    /// Parses one `Link` header value, e.g.
    /// `<https://x/api/v1/courses?page=2>; rel="next", <...>; rel="last"`.
    pub fn parse(value: &str) -> Self {
        let mut links = Self::default();
        links.merge(value);
        links
    }

    fn merge(&mut self, value: &str) {
        for entry in split_entries(value) {
            let Some((url, params)) = parse_entry(entry) else {
                tracing::warn!("Skipping malformed Link entry: {}", entry);
                continue;
            };
            let url = match Url::parse(url) {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!("Skipping Link entry with bad URL {}: {}", url, e);
                    continue;
                }
            };
            for rel in rels(params) {
                let slot = match rel.to_ascii_lowercase().as_str() {
                    "current" => &mut self.current,
                    "next" => &mut self.next,
                    "prev" | "previous" => &mut self.prev,
                    "first" => &mut self.first,
                    "last" => &mut self.last,
                    _ => continue,
                };
                *slot = Some(url.clone());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Splits on commas that are not inside `<...>`.
fn split_entries(value: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in value.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(value[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(value[start..].trim());
    entries.retain(|e| !e.is_empty());
    entries
}

fn parse_entry(entry: &str) -> Option<(&str, &str)> {
    let rest = entry.strip_prefix('<')?;
    let end = rest.find('>')?;
    Some((&rest[..end], &rest[end + 1..]))
}

fn rels(params: &str) -> Vec<&str> {
    params
        .split(';')
        .filter_map(|param| {
            let (name, value) = param.split_once('=')?;
            if name.trim().eq_ignore_ascii_case("rel") {
                Some(value.trim().trim_matches('"'))
            } else {
                None
            }
        })
        .flat_map(str::split_whitespace)
        .collect()
}

/// One page of a list endpoint.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub links: PageLinks,
}

impl<T: DeserializeOwned> Paged<T> {
    /// Fetches the page named by `links.next`, or `None` on the last page.
    pub async fn next_page<Tr: Transport>(&self, transport: &Tr) -> Result<Option<Self>, Error> {
        let Some(next) = &self.links.next else {
            return Ok(None);
        };
        tracing::debug!("Following next page link {}", next);
        let response = transport.send(HttpRequest::follow(next)).await?;
        response.paged().map(Some)
    }

    /// Follows `next` links until the last page and returns every item.
    ///
    /// Stops at the first `next` link naming a page already fetched, judged by
    /// each page's `current` link and the links followed so far.
    pub async fn collect_all<Tr: Transport>(self, transport: &Tr) -> Result<Vec<T>, Error> {
        let mut items = Vec::new();
        let mut seen: Vec<Url> = Vec::new();
        let mut page = Some(self);
        while let Some(current) = page {
            if let Some(url) = &current.links.current {
                if !seen.contains(url) {
                    seen.push(url.clone());
                }
            }
            if let Some(next) = &current.links.next {
                if seen.contains(next) {
                    tracing::warn!("Pagination loop detected at {}", next);
                    items.extend(current.items);
                    break;
                }
                seen.push(next.clone());
            }
            page = current.next_page(transport).await?;
            items.extend(current.items);
        }
        Ok(items)
    }
}
