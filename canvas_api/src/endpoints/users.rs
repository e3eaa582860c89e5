//! User endpoints.

use reqwest::Method;
use serde::Serialize;

use crate::{
    endpoint::{Body, Endpoint},
    paging::Paged,
    params::Params,
    response::RawResponse,
    types::User,
    validation::{ValidationErrors, Validator},
    Error,
};

pub const COURSE_USER_SORTS: &[&str] = &["username", "last_login", "email", "sis_id"];

pub const COURSE_USER_ENROLLMENT_TYPES: &[&str] = &[
    "teacher",
    "student",
    "student_view",
    "ta",
    "observer",
    "designer",
];

pub const COURSE_USER_ENROLLMENT_STATES: &[&str] =
    &["active", "invited", "rejected", "completed", "inactive"];

pub const COURSE_USER_INCLUDES: &[&str] = &[
    "enrollments",
    "locked",
    "avatar_url",
    "test_student",
    "bio",
    "custom_links",
    "current_grading_period_scores",
    "uuid",
];

pub const USER_DETAIL_INCLUDES: &[&str] = &["uuid", "last_login"];

/// `GET /courses/{course_id}/users`
#[derive(Debug, Clone, Default)]
pub struct ListUsersInCourse {
    pub path: ListUsersInCoursePath,
    pub query: ListUsersInCourseQuery,
}

#[derive(Debug, Clone, Default)]
pub struct ListUsersInCoursePath {
    pub course_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ListUsersInCourseQuery {
    /// Partial name or full id to match.
    pub search_term: Option<String>,
    pub sort: Option<String>,
    pub enrollment_type: Vec<String>,
    pub enrollment_role_id: Option<i64>,
    pub include: Vec<String>,
    pub user_id: Option<String>,
    pub user_ids: Vec<i64>,
    pub enrollment_state: Vec<String>,
    pub per_page: Option<i64>,
}

impl ListUsersInCourse {
    pub fn new(course_id: impl ToString) -> Self {
        Self {
            path: ListUsersInCoursePath {
                course_id: course_id.to_string(),
            },
            ..Self::default()
        }
    }

    pub fn with_search_term(mut self, search_term: &str) -> Self {
        self.query.search_term = Some(search_term.to_string());
        self
    }

    pub fn with_enrollment_type(mut self, enrollment_type: &str) -> Self {
        self.query.enrollment_type.push(enrollment_type.to_string());
        self
    }

    pub fn with_include(mut self, include: &str) -> Self {
        self.query.include.push(include.to_string());
        self
    }
}

impl Endpoint for ListUsersInCourse {
    type Output = Paged<User>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/courses/{course_id}/users";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("course_id", self.path.course_id.clone())]
    }

    fn query(&self) -> Params {
        Params::new()
            .with("search_term", &self.query.search_term)
            .with("sort", &self.query.sort)
            .with("enrollment_type", &self.query.enrollment_type)
            .with("enrollment_role_id", &self.query.enrollment_role_id)
            .with("include", &self.query.include)
            .with("user_id", &self.query.user_id)
            .with("user_ids", &self.query.user_ids)
            .with("enrollment_state", &self.query.enrollment_state)
            .with("per_page", &self.query.per_page)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("course_id", &self.path.course_id)
            .one_of("sort", &self.query.sort, COURSE_USER_SORTS)
            .one_of(
                "enrollment_type[]",
                &self.query.enrollment_type,
                COURSE_USER_ENROLLMENT_TYPES,
            )
            .one_of("include[]", &self.query.include, COURSE_USER_INCLUDES)
            .one_of(
                "enrollment_state[]",
                &self.query.enrollment_state,
                COURSE_USER_ENROLLMENT_STATES,
            )
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.paged()
    }
}

/// `GET /users/{id}`. `id` may be `self`.
#[derive(Debug, Clone, Default)]
pub struct ShowUserDetails {
    pub path: UserPath,
    pub query: ShowUserDetailsQuery,
}

#[derive(Debug, Clone, Default)]
pub struct UserPath {
    pub id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ShowUserDetailsQuery {
    pub include: Vec<String>,
}

impl ShowUserDetails {
    pub fn new(id: impl ToString) -> Self {
        Self {
            path: UserPath { id: id.to_string() },
            ..Self::default()
        }
    }
}

impl Endpoint for ShowUserDetails {
    type Output = User;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/users/{id}";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.path.id.clone())]
    }

    fn query(&self) -> Params {
        Params::new().with("include", &self.query.include)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("id", &self.path.id)
            .one_of("include[]", &self.query.include, USER_DETAIL_INCLUDES)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}

/// `PUT /users/{id}`, sent as a JSON body.
#[derive(Debug, Clone, Default)]
pub struct EditUser {
    pub path: UserPath,
    pub form: EditUserForm,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditUserForm {
    pub user: EditUserAttributes,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditUserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortable_name: Option<String>,
    /// IANA or Rails time zone name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl EditUser {
    pub fn new(id: impl ToString, user: EditUserAttributes) -> Self {
        Self {
            path: UserPath { id: id.to_string() },
            form: EditUserForm { user },
        }
    }
}

impl Endpoint for EditUser {
    type Output = User;
    const METHOD: Method = Method::PUT;
    const PATH: &'static str = "/users/{id}";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.path.id.clone())]
    }

    fn body(&self) -> Result<Option<Body>, Error> {
        Body::json(&self.form).map(Some)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().required("id", &self.path.id).finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}
