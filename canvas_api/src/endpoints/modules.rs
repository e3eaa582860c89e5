//! Module endpoints.

use reqwest::Method;

use crate::{
    endpoint::Endpoint,
    paging::Paged,
    params::Params,
    response::RawResponse,
    types::Module,
    validation::{ValidationErrors, Validator},
    Error,
};

pub const MODULE_INCLUDES: &[&str] = &["items", "content_details"];

/// `GET /courses/{course_id}/modules`
#[derive(Debug, Clone, Default)]
pub struct ListModules {
    pub path: ListModulesPath,
    pub query: ListModulesQuery,
}

#[derive(Debug, Clone, Default)]
pub struct ListModulesPath {
    pub course_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ListModulesQuery {
    pub include: Vec<String>,
    pub search_term: Option<String>,
    /// Report completion state for this student instead of the caller.
    pub student_id: Option<String>,
    pub per_page: Option<i64>,
}

impl ListModules {
    pub fn new(course_id: impl ToString) -> Self {
        Self {
            path: ListModulesPath {
                course_id: course_id.to_string(),
            },
            ..Self::default()
        }
    }

    pub fn with_include(mut self, include: &str) -> Self {
        self.query.include.push(include.to_string());
        self
    }

    pub fn with_student_id(mut self, student_id: impl ToString) -> Self {
        self.query.student_id = Some(student_id.to_string());
        self
    }
}

impl Endpoint for ListModules {
    type Output = Paged<Module>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/courses/{course_id}/modules";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("course_id", self.path.course_id.clone())]
    }

    fn query(&self) -> Params {
        Params::new()
            .with("include", &self.query.include)
            .with("search_term", &self.query.search_term)
            .with("student_id", &self.query.student_id)
            .with("per_page", &self.query.per_page)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("course_id", &self.path.course_id)
            .one_of("include[]", &self.query.include, MODULE_INCLUDES)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.paged()
    }
}

/// `PUT /courses/{course_id}/modules/{module_id}/items/{id}/done`: marks a
/// "mark as done" requirement complete. Answers 204 No Content.
#[derive(Debug, Clone, Default)]
pub struct MarkModuleItemDone {
    pub path: MarkModuleItemDonePath,
}

#[derive(Debug, Clone, Default)]
pub struct MarkModuleItemDonePath {
    pub course_id: String,
    pub module_id: String,
    pub id: String,
}

impl MarkModuleItemDone {
    pub fn new(course_id: impl ToString, module_id: impl ToString, id: impl ToString) -> Self {
        Self {
            path: MarkModuleItemDonePath {
                course_id: course_id.to_string(),
                module_id: module_id.to_string(),
                id: id.to_string(),
            },
        }
    }
}

impl Endpoint for MarkModuleItemDone {
    type Output = ();
    const METHOD: Method = Method::PUT;
    const PATH: &'static str = "/courses/{course_id}/modules/{module_id}/items/{id}/done";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("course_id", self.path.course_id.clone()),
            ("module_id", self.path.module_id.clone()),
            ("id", self.path.id.clone()),
        ]
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("course_id", &self.path.course_id)
            .required("module_id", &self.path.module_id)
            .required("id", &self.path.id)
            .finish()
    }

    fn decode(&self, _response: RawResponse) -> Result<Self::Output, Error> {
        Ok(())
    }
}
