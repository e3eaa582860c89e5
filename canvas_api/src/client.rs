//! HTTP client for the Canvas LMS REST API.

use reqwest::header::ACCEPT;
use url::Url;

use crate::{
    config::ClientConfig,
    endpoint::{Body, Endpoint, HttpRequest, Target},
    paging::PageLinks,
    params::Params,
    response::{truncate_body, RawResponse},
    transport::Transport,
    Error,
};

/// reqwest-backed [`Transport`].
///
/// Holds one connection pool; clones share it, so a single client can serve
/// concurrent calls.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_api_url: String,
    origin: url::Origin,
    access_token: String,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let origin = Url::parse(&config.base_url)?.origin();
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            http,
            base_api_url: config.base_url.trim_end_matches('/').to_string(),
            origin,
            access_token: config.access_token,
        })
    }

    /// Configures the client from `CANVAS_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Creates a client with a custom API root. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, access_token: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::new(base_url, access_token))
    }

    /// Validates, sends and decodes one endpoint call.
    pub async fn execute<E: Endpoint>(&self, endpoint: &E) -> Result<E::Output, Error> {
        endpoint.execute(self).await
    }

    fn get_url(&self, target: &Target, query: &Params) -> Result<Url, Error> {
        let mut url = match target {
            Target::Path(path) => Url::parse(&format!("{}{}", self.base_api_url, path))
                .map_err(|e| {
                    tracing::error!("Invalid URL constructed: {}", e);
                    Error::InvalidUrl(e)
                })?,
            // Links must stay on the API origin: the bearer token goes with every request.
            Target::Absolute(url) if url.origin() == self.origin => url.clone(),
            Target::Absolute(url) => {
                tracing::warn!("Refusing link to foreign origin {}", url);
                return Err(Error::ForeignLink(url.clone()));
            }
        };
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs().iter());
        }
        Ok(url)
    }
}

impl Transport for Client {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, Error> {
        let url = self.get_url(&request.target, &request.query)?;
        tracing::debug!(method = %request.method, %url, "Sending request");

        let mut builder = self
            .http
            .request(request.method, url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json");
        builder = match &request.body {
            Some(Body::Form(params)) => builder.form(params.pairs()),
            Some(Body::Json(value)) => builder.json(value),
            None => builder,
        };

        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let final_url = resp.url().clone();
        let headers = resp.headers().clone();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let mut links = PageLinks::from_headers(&headers);
        if links.current.is_none() {
            links.current = Some(final_url);
        }
        Ok(RawResponse {
            status: status.as_u16(),
            links,
            headers,
            body,
        })
    }
}
