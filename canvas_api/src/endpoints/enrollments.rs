//! Enrollment endpoints.

use reqwest::Method;

use crate::{
    endpoint::{Body, Endpoint},
    paging::Paged,
    params::{ParamValue, Params},
    response::RawResponse,
    types::Enrollment,
    validation::{ValidationErrors, Validator},
    Error,
};

pub const ENROLLMENT_TYPES: &[&str] = &[
    "StudentEnrollment",
    "TeacherEnrollment",
    "TaEnrollment",
    "ObserverEnrollment",
    "DesignerEnrollment",
];

pub const ENROLLMENT_LIST_STATES: &[&str] = &[
    "active",
    "invited",
    "creation_pending",
    "deleted",
    "rejected",
    "completed",
    "inactive",
    "current_and_invited",
    "current_and_future",
    "current_and_concluded",
];

pub const ENROLLMENT_INCLUDES: &[&str] = &[
    "avatar_url",
    "group_ids",
    "locked",
    "observed_users",
    "can_be_removed",
    "uuid",
    "current_points",
];

pub const NEW_ENROLLMENT_STATES: &[&str] = &["active", "invited", "inactive"];

pub const ENROLLMENT_TASKS: &[&str] = &["conclude", "delete", "inactivate", "deactivate"];

#[derive(Debug, Clone, Default)]
pub struct CourseEnrollmentsPath {
    pub course_id: String,
}

/// `GET /courses/{course_id}/enrollments`
#[derive(Debug, Clone, Default)]
pub struct ListEnrollmentsCourse {
    pub path: CourseEnrollmentsPath,
    pub query: ListEnrollmentsCourseQuery,
}

#[derive(Debug, Clone, Default)]
pub struct ListEnrollmentsCourseQuery {
    /// Sent as `type[]`.
    pub enrollment_type: Vec<String>,
    pub role: Vec<String>,
    pub state: Vec<String>,
    pub include: Vec<String>,
    pub user_id: Option<String>,
    pub per_page: Option<i64>,
}

impl ListEnrollmentsCourse {
    pub fn new(course_id: impl ToString) -> Self {
        Self {
            path: CourseEnrollmentsPath {
                course_id: course_id.to_string(),
            },
            ..Self::default()
        }
    }

    pub fn with_type(mut self, enrollment_type: &str) -> Self {
        self.query.enrollment_type.push(enrollment_type.to_string());
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.query.state.push(state.to_string());
        self
    }
}

impl Endpoint for ListEnrollmentsCourse {
    type Output = Paged<Enrollment>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/courses/{course_id}/enrollments";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("course_id", self.path.course_id.clone())]
    }

    fn query(&self) -> Params {
        Params::new()
            .with("type", &self.query.enrollment_type)
            .with("role", &self.query.role)
            .with("state", &self.query.state)
            .with("include", &self.query.include)
            .with("user_id", &self.query.user_id)
            .with("per_page", &self.query.per_page)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("course_id", &self.path.course_id)
            .one_of("type[]", &self.query.enrollment_type, ENROLLMENT_TYPES)
            .one_of("state[]", &self.query.state, ENROLLMENT_LIST_STATES)
            .one_of("include[]", &self.query.include, ENROLLMENT_INCLUDES)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.paged()
    }
}

/// `POST /courses/{course_id}/enrollments`
#[derive(Debug, Clone, Default)]
pub struct EnrollUser {
    pub path: CourseEnrollmentsPath,
    pub form: EnrollUserForm,
}

#[derive(Debug, Clone, Default)]
pub struct EnrollUserForm {
    pub enrollment: EnrollmentAttributes,
}

/// The `enrollment[...]` group.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentAttributes {
    /// Required. Numeric id or SIS reference.
    pub user_id: String,
    /// Required. One of [`ENROLLMENT_TYPES`], sent as `enrollment[type]`.
    pub enrollment_type: String,
    pub role_id: Option<i64>,
    pub enrollment_state: Option<String>,
    pub course_section_id: Option<i64>,
    pub limit_privileges_to_course_section: Option<bool>,
    pub notify: Option<bool>,
}

impl ParamValue for EnrollmentAttributes {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        let field = |name: &str| format!("{}[{}]", key, name);
        self.user_id.append_to(&field("user_id"), pairs);
        self.enrollment_type.append_to(&field("type"), pairs);
        self.role_id.append_to(&field("role_id"), pairs);
        self.enrollment_state
            .append_to(&field("enrollment_state"), pairs);
        self.course_section_id
            .append_to(&field("course_section_id"), pairs);
        self.limit_privileges_to_course_section
            .append_to(&field("limit_privileges_to_course_section"), pairs);
        self.notify.append_to(&field("notify"), pairs);
    }
}

impl EnrollUser {
    pub fn new(course_id: impl ToString, user_id: impl ToString, enrollment_type: &str) -> Self {
        Self {
            path: CourseEnrollmentsPath {
                course_id: course_id.to_string(),
            },
            form: EnrollUserForm {
                enrollment: EnrollmentAttributes {
                    user_id: user_id.to_string(),
                    enrollment_type: enrollment_type.to_string(),
                    ..EnrollmentAttributes::default()
                },
            },
        }
    }

    pub fn with_enrollment_state(mut self, state: &str) -> Self {
        self.form.enrollment.enrollment_state = Some(state.to_string());
        self
    }

    pub fn with_notify(mut self, notify: bool) -> Self {
        self.form.enrollment.notify = Some(notify);
        self
    }
}

impl Endpoint for EnrollUser {
    type Output = Enrollment;
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/courses/{course_id}/enrollments";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("course_id", self.path.course_id.clone())]
    }

    fn body(&self) -> Result<Option<Body>, Error> {
        Ok(Some(Body::Form(
            Params::new().with("enrollment", &self.form.enrollment),
        )))
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let enrollment = &self.form.enrollment;
        Validator::new()
            .required("course_id", &self.path.course_id)
            .required("enrollment[user_id]", &enrollment.user_id)
            .required("enrollment[type]", &enrollment.enrollment_type)
            .one_of(
                "enrollment[type]",
                &enrollment.enrollment_type,
                ENROLLMENT_TYPES,
            )
            .one_of(
                "enrollment[enrollment_state]",
                &enrollment.enrollment_state,
                NEW_ENROLLMENT_STATES,
            )
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}

/// `DELETE /courses/{course_id}/enrollments/{id}`: conclude, delete or
/// deactivate an enrollment. The server defaults `task` to `conclude`.
#[derive(Debug, Clone, Default)]
pub struct ConcludeEnrollment {
    pub path: EnrollmentPath,
    pub query: ConcludeEnrollmentQuery,
}

#[derive(Debug, Clone, Default)]
pub struct EnrollmentPath {
    pub course_id: String,
    pub id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConcludeEnrollmentQuery {
    pub task: Option<String>,
}

impl ConcludeEnrollment {
    pub fn new(course_id: impl ToString, id: impl ToString) -> Self {
        Self {
            path: EnrollmentPath {
                course_id: course_id.to_string(),
                id: id.to_string(),
            },
            ..Self::default()
        }
    }

    pub fn with_task(mut self, task: &str) -> Self {
        self.query.task = Some(task.to_string());
        self
    }
}

impl Endpoint for ConcludeEnrollment {
    type Output = Enrollment;
    const METHOD: Method = Method::DELETE;
    const PATH: &'static str = "/courses/{course_id}/enrollments/{id}";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("course_id", self.path.course_id.clone()),
            ("id", self.path.id.clone()),
        ]
    }

    fn query(&self) -> Params {
        Params::new().with("task", &self.query.task)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("course_id", &self.path.course_id)
            .required("id", &self.path.id)
            .one_of("task", &self.query.task, ENROLLMENT_TASKS)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}
