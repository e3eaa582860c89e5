//! Assignment endpoints.

use chrono::{DateTime, Utc};
use reqwest::Method;

use crate::{
    endpoint::{Body, Endpoint},
    paging::Paged,
    params::{ParamValue, Params},
    response::RawResponse,
    types::Assignment,
    validation::{ValidationErrors, Validator},
    Error,
};

pub const ASSIGNMENT_LIST_INCLUDES: &[&str] = &[
    "submission",
    "assignment_visibility",
    "all_dates",
    "overrides",
    "observed_users",
    "can_edit",
    "score_statistics",
];

pub const ASSIGNMENT_INCLUDES: &[&str] = &[
    "submission",
    "assignment_visibility",
    "overrides",
    "observed_users",
    "can_edit",
    "score_statistics",
];

pub const ASSIGNMENT_BUCKETS: &[&str] = &[
    "past",
    "overdue",
    "undated",
    "ungraded",
    "unsubmitted",
    "upcoming",
    "future",
];

pub const ASSIGNMENT_ORDERS: &[&str] = &["position", "name", "due_at"];

pub const SUBMISSION_TYPES: &[&str] = &[
    "online_quiz",
    "none",
    "on_paper",
    "discussion_topic",
    "external_tool",
    "online_upload",
    "online_text_entry",
    "online_url",
    "media_recording",
    "student_annotation",
];

pub const GRADING_TYPES: &[&str] = &[
    "pass_fail",
    "percent",
    "letter_grade",
    "gpa_scale",
    "points",
    "not_graded",
];

#[derive(Debug, Clone, Default)]
pub struct CourseAssignmentsPath {
    pub course_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentPath {
    pub course_id: String,
    pub id: String,
}

impl AssignmentPath {
    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("course_id", self.course_id.clone()),
            ("id", self.id.clone()),
        ]
    }

    fn check(&self) -> Validator {
        Validator::new()
            .required("course_id", &self.course_id)
            .required("id", &self.id)
    }
}

/// `GET /courses/{course_id}/assignments`
#[derive(Debug, Clone, Default)]
pub struct ListAssignments {
    pub path: CourseAssignmentsPath,
    pub query: ListAssignmentsQuery,
}

#[derive(Debug, Clone, Default)]
pub struct ListAssignmentsQuery {
    pub include: Vec<String>,
    pub search_term: Option<String>,
    pub override_assignment_dates: Option<bool>,
    pub needs_grading_count_by_section: Option<bool>,
    pub bucket: Option<String>,
    pub assignment_ids: Vec<String>,
    pub order_by: Option<String>,
    pub post_to_sis: Option<bool>,
    pub per_page: Option<i64>,
}

impl ListAssignments {
    pub fn new(course_id: impl ToString) -> Self {
        Self {
            path: CourseAssignmentsPath {
                course_id: course_id.to_string(),
            },
            ..Self::default()
        }
    }

    pub fn with_bucket(mut self, bucket: &str) -> Self {
        self.query.bucket = Some(bucket.to_string());
        self
    }

    pub fn with_order_by(mut self, order_by: &str) -> Self {
        self.query.order_by = Some(order_by.to_string());
        self
    }

    pub fn with_include(mut self, include: &str) -> Self {
        self.query.include.push(include.to_string());
        self
    }
}

impl Endpoint for ListAssignments {
    type Output = Paged<Assignment>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/courses/{course_id}/assignments";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("course_id", self.path.course_id.clone())]
    }

    fn query(&self) -> Params {
        Params::new()
            .with("include", &self.query.include)
            .with("search_term", &self.query.search_term)
            .with(
                "override_assignment_dates",
                &self.query.override_assignment_dates,
            )
            .with(
                "needs_grading_count_by_section",
                &self.query.needs_grading_count_by_section,
            )
            .with("bucket", &self.query.bucket)
            .with("assignment_ids", &self.query.assignment_ids)
            .with("order_by", &self.query.order_by)
            .with("post_to_sis", &self.query.post_to_sis)
            .with("per_page", &self.query.per_page)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("course_id", &self.path.course_id)
            .one_of("include[]", &self.query.include, ASSIGNMENT_LIST_INCLUDES)
            .one_of("bucket", &self.query.bucket, ASSIGNMENT_BUCKETS)
            .one_of("order_by", &self.query.order_by, ASSIGNMENT_ORDERS)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.paged()
    }
}

/// `GET /courses/{course_id}/assignments/{id}`
#[derive(Debug, Clone, Default)]
pub struct GetSingleAssignment {
    pub path: AssignmentPath,
    pub query: GetSingleAssignmentQuery,
}

#[derive(Debug, Clone, Default)]
pub struct GetSingleAssignmentQuery {
    pub include: Vec<String>,
    pub override_assignment_dates: Option<bool>,
}

impl GetSingleAssignment {
    pub fn new(course_id: impl ToString, id: impl ToString) -> Self {
        Self {
            path: AssignmentPath {
                course_id: course_id.to_string(),
                id: id.to_string(),
            },
            ..Self::default()
        }
    }
}

impl Endpoint for GetSingleAssignment {
    type Output = Assignment;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/courses/{course_id}/assignments/{id}";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        self.path.params()
    }

    fn query(&self) -> Params {
        Params::new()
            .with("include", &self.query.include)
            .with(
                "override_assignment_dates",
                &self.query.override_assignment_dates,
            )
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.path
            .check()
            .one_of("include[]", &self.query.include, ASSIGNMENT_INCLUDES)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}

/// The `assignment[...]` group for assignment creation.
#[derive(Debug, Clone, Default)]
pub struct AssignmentAttributes {
    /// Required.
    pub name: String,
    pub position: Option<i64>,
    pub submission_types: Vec<String>,
    pub allowed_extensions: Vec<String>,
    pub points_possible: Option<f64>,
    pub grading_type: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
    pub lock_at: Option<DateTime<Utc>>,
    pub unlock_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub assignment_group_id: Option<i64>,
    pub peer_reviews: Option<bool>,
    pub published: Option<bool>,
}

impl ParamValue for AssignmentAttributes {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        let field = |name: &str| format!("{}[{}]", key, name);
        self.name.append_to(&field("name"), pairs);
        self.position.append_to(&field("position"), pairs);
        self.submission_types
            .append_to(&field("submission_types"), pairs);
        self.allowed_extensions
            .append_to(&field("allowed_extensions"), pairs);
        self.points_possible
            .append_to(&field("points_possible"), pairs);
        self.grading_type.append_to(&field("grading_type"), pairs);
        self.due_at.append_to(&field("due_at"), pairs);
        self.lock_at.append_to(&field("lock_at"), pairs);
        self.unlock_at.append_to(&field("unlock_at"), pairs);
        self.description.append_to(&field("description"), pairs);
        self.assignment_group_id
            .append_to(&field("assignment_group_id"), pairs);
        self.peer_reviews.append_to(&field("peer_reviews"), pairs);
        self.published.append_to(&field("published"), pairs);
    }
}

/// `POST /courses/{course_id}/assignments`
#[derive(Debug, Clone, Default)]
pub struct CreateAssignment {
    pub path: CourseAssignmentsPath,
    pub form: CreateAssignmentForm,
}

#[derive(Debug, Clone, Default)]
pub struct CreateAssignmentForm {
    pub assignment: AssignmentAttributes,
}

impl CreateAssignment {
    pub fn new(course_id: impl ToString, assignment: AssignmentAttributes) -> Self {
        Self {
            path: CourseAssignmentsPath {
                course_id: course_id.to_string(),
            },
            form: CreateAssignmentForm { assignment },
        }
    }
}

impl Endpoint for CreateAssignment {
    type Output = Assignment;
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/courses/{course_id}/assignments";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("course_id", self.path.course_id.clone())]
    }

    fn body(&self) -> Result<Option<Body>, Error> {
        Ok(Some(Body::Form(
            Params::new().with("assignment", &self.form.assignment),
        )))
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let assignment = &self.form.assignment;
        Validator::new()
            .required("course_id", &self.path.course_id)
            .required("assignment[name]", &assignment.name)
            .one_of(
                "assignment[submission_types][]",
                &assignment.submission_types,
                SUBMISSION_TYPES,
            )
            .one_of(
                "assignment[grading_type]",
                &assignment.grading_type,
                GRADING_TYPES,
            )
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}

/// `DELETE /courses/{course_id}/assignments/{id}`: answers with the deleted assignment.
#[derive(Debug, Clone, Default)]
pub struct DeleteAssignment {
    pub path: AssignmentPath,
}

impl DeleteAssignment {
    pub fn new(course_id: impl ToString, id: impl ToString) -> Self {
        Self {
            path: AssignmentPath {
                course_id: course_id.to_string(),
                id: id.to_string(),
            },
        }
    }
}

impl Endpoint for DeleteAssignment {
    type Output = Assignment;
    const METHOD: Method = Method::DELETE;
    const PATH: &'static str = "/courses/{course_id}/assignments/{id}";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        self.path.params()
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.path.check().finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}
