use reqwest::Method;

use crate::{
    endpoint::Endpoint,
    response::RawResponse,
    types::Progress,
    validation::{ValidationErrors, Validator},
    Error,
};

/// `GET /progress/{id}`: polls an asynchronous job.
#[derive(Debug, Clone, Default)]
pub struct QueryProgress {
    pub path: QueryProgressPath,
}

#[derive(Debug, Clone, Default)]
pub struct QueryProgressPath {
    pub id: String,
}

impl QueryProgress {
    pub fn new(id: impl ToString) -> Self {
        Self {
            path: QueryProgressPath { id: id.to_string() },
        }
    }
}

impl Endpoint for QueryProgress {
    type Output = Progress;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/progress/{id}";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.path.id.clone())]
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().required("id", &self.path.id).finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}
