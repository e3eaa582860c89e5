//! The [`Endpoint`] trait shared by every request type, and the plain-data
//! [`HttpRequest`] an endpoint is turned into before it reaches a transport.

#![allow(async_fn_in_trait)]

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::{
    params::Params, response::RawResponse, transport::Transport, validation::ValidationErrors,
    Error,
};

/// Where a request goes: an endpoint path under the API root, or an absolute
/// URL handed out by the server (pagination links).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Path(String),
    Absolute(Url),
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Params),
    /// Sent as `application/json`.
    Json(serde_json::Value),
}

impl Body {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        serde_json::to_value(value)
            .map(Body::Json)
            .map_err(Error::Encode)
    }
}

/// An HTTP request described as plain data.
///
/// Built by [`Endpoint::build_request`]; a [`Transport`] executes it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub target: Target,
    pub query: Params,
    pub body: Option<Body>,
}

impl HttpRequest {
    /// A bare GET for a URL the server handed back, e.g. a `next` page link.
    pub fn follow(url: &Url) -> Self {
        Self {
            method: Method::GET,
            target: Target::Absolute(url.clone()),
            query: Params::new(),
            body: None,
        }
    }
}

/// One API operation: fixed verb and path template, typed parameters and a
/// typed result.
///
/// Implementors supply the constants, `decode`, and whichever parameter groups
/// they have; the remaining methods are provided.
pub trait Endpoint {
    type Output;

    const METHOD: Method;

    /// Path under the API root, with `{name}` placeholders for path parameters.
    const PATH: &'static str;

    /// Values for the placeholders in [`PATH`](Self::PATH).
    fn path_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn query(&self) -> Params {
        Params::new()
    }

    fn body(&self) -> Result<Option<Body>, Error> {
        Ok(None)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error>;

    fn method(&self) -> Method {
        Self::METHOD
    }

    fn url_path(&self) -> String {
        render_path(Self::PATH, &self.path_params())
    }

    fn query_string(&self) -> String {
        self.query().encode()
    }

    /// Validates and assembles the request without sending it.
    fn build_request(&self) -> Result<HttpRequest, Error> {
        self.validate()?;
        let path = self.url_path();
        if path.contains('{') {
            return Err(Error::UnresolvedPath(path));
        }
        Ok(HttpRequest {
            method: self.method(),
            target: Target::Path(path),
            query: self.query(),
            body: self.body()?,
        })
    }

    /// Validates, sends through `transport` and decodes the response.
    ///
    /// Nothing reaches the transport when validation fails.
    async fn execute<T: Transport>(&self, transport: &T) -> Result<Self::Output, Error>
    where
        Self: Sized,
    {
        let request = self.build_request()?;
        let response = transport.send(request).await?;
        self.decode(response)
    }
}

/// Replaces each `{name}` in `template` with the percent-encoded value bound
/// to `name`. Placeholders without a binding are left in place.
pub fn render_path(template: &str, params: &[(&str, String)]) -> String {
    let mut path = template.to_string();
    for (name, value) in params {
        path = path.replace(&format!("{{{}}}", name), &urlencoding::encode(value));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::RawResponse;

    struct ShowThing {
        id: String,
    }

    impl Endpoint for ShowThing {
        type Output = ();
        const METHOD: Method = Method::GET;
        const PATH: &'static str = "/things/{id}/parts/{id}";

        fn path_params(&self) -> Vec<(&'static str, String)> {
            vec![("id", self.id.clone())]
        }

        fn decode(&self, _response: RawResponse) -> Result<(), Error> {
            Ok(())
        }
    }

    struct Unbound;

    impl Endpoint for Unbound {
        type Output = ();
        const METHOD: Method = Method::DELETE;
        const PATH: &'static str = "/things/{id}";

        fn decode(&self, _response: RawResponse) -> Result<(), Error> {
            Ok(())
        }
    }

    #[test]
    fn substitutes_every_occurrence() {
        let thing = ShowThing { id: "7".to_string() };
        assert_eq!(thing.url_path(), "/things/7/parts/7");
    }

    #[test]
    fn path_values_are_percent_encoded() {
        let thing = ShowThing {
            id: "sis_course_id:A/B 1".to_string(),
        };
        assert_eq!(
            thing.url_path(),
            "/things/sis_course_id%3AA%2FB%201/parts/sis_course_id%3AA%2FB%201"
        );
    }

    #[test]
    fn unresolved_placeholder_is_rejected() {
        let err = Unbound.build_request().unwrap_err();
        assert!(matches!(err, Error::UnresolvedPath(ref p) if p == "/things/{id}"));
    }

    #[test]
    fn build_request_carries_method_and_path() {
        let request = ShowThing { id: "1".to_string() }.build_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.target, Target::Path("/things/1/parts/1".to_string()));
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }
}
