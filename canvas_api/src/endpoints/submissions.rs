//! Submission endpoints.

use reqwest::Method;

use crate::{
    endpoint::{Body, Endpoint},
    paging::Paged,
    params::{ParamValue, Params},
    response::RawResponse,
    types::Submission,
    validation::{ValidationErrors, Validator},
    Error,
};

pub const SUBMISSION_INCLUDES: &[&str] = &[
    "submission_history",
    "submission_comments",
    "rubric_assessment",
    "assignment",
    "visibility",
    "course",
    "user",
    "group",
    "read_status",
];

pub const LATE_POLICY_STATUSES: &[&str] = &["late", "missing", "extended", "none"];

#[derive(Debug, Clone, Default)]
pub struct AssignmentSubmissionsPath {
    pub course_id: String,
    pub assignment_id: String,
}

/// Path group for endpoints that address one student's submission.
#[derive(Debug, Clone, Default)]
pub struct SubmissionPath {
    pub course_id: String,
    pub assignment_id: String,
    pub user_id: String,
}

impl SubmissionPath {
    pub fn new(
        course_id: impl ToString,
        assignment_id: impl ToString,
        user_id: impl ToString,
    ) -> Self {
        Self {
            course_id: course_id.to_string(),
            assignment_id: assignment_id.to_string(),
            user_id: user_id.to_string(),
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("course_id", self.course_id.clone()),
            ("assignment_id", self.assignment_id.clone()),
            ("user_id", self.user_id.clone()),
        ]
    }

    fn check(&self) -> Validator {
        Validator::new()
            .required("course_id", &self.course_id)
            .required("assignment_id", &self.assignment_id)
            .required("user_id", &self.user_id)
    }
}

/// `GET /courses/{course_id}/assignments/{assignment_id}/submissions`
#[derive(Debug, Clone, Default)]
pub struct ListAssignmentSubmissions {
    pub path: AssignmentSubmissionsPath,
    pub query: ListAssignmentSubmissionsQuery,
}

#[derive(Debug, Clone, Default)]
pub struct ListAssignmentSubmissionsQuery {
    pub include: Vec<String>,
    pub grouped: Option<bool>,
    pub per_page: Option<i64>,
}

impl ListAssignmentSubmissions {
    pub fn new(course_id: impl ToString, assignment_id: impl ToString) -> Self {
        Self {
            path: AssignmentSubmissionsPath {
                course_id: course_id.to_string(),
                assignment_id: assignment_id.to_string(),
            },
            ..Self::default()
        }
    }

    pub fn with_include(mut self, include: &str) -> Self {
        self.query.include.push(include.to_string());
        self
    }
}

impl Endpoint for ListAssignmentSubmissions {
    type Output = Paged<Submission>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/courses/{course_id}/assignments/{assignment_id}/submissions";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("course_id", self.path.course_id.clone()),
            ("assignment_id", self.path.assignment_id.clone()),
        ]
    }

    fn query(&self) -> Params {
        Params::new()
            .with("include", &self.query.include)
            .with("grouped", &self.query.grouped)
            .with("per_page", &self.query.per_page)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("course_id", &self.path.course_id)
            .required("assignment_id", &self.path.assignment_id)
            .one_of("include[]", &self.query.include, SUBMISSION_INCLUDES)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.paged()
    }
}

/// `comment[...]` group for grading.
#[derive(Debug, Clone, Default)]
pub struct GradeComment {
    pub text_comment: Option<String>,
    /// Send the comment to every member of a group assignment.
    pub group_comment: Option<bool>,
}

impl ParamValue for GradeComment {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        self.text_comment
            .append_to(&format!("{}[text_comment]", key), pairs);
        self.group_comment
            .append_to(&format!("{}[group_comment]", key), pairs);
    }
}

/// `submission[...]` group for grading.
#[derive(Debug, Clone, Default)]
pub struct GradeAttributes {
    /// Points, percentage (`"85%"`), letter grade or `"pass"`/`"fail"`.
    pub posted_grade: Option<String>,
    pub excuse: Option<bool>,
    pub late_policy_status: Option<String>,
    pub seconds_late_override: Option<i64>,
}

impl ParamValue for GradeAttributes {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        self.posted_grade
            .append_to(&format!("{}[posted_grade]", key), pairs);
        self.excuse.append_to(&format!("{}[excuse]", key), pairs);
        self.late_policy_status
            .append_to(&format!("{}[late_policy_status]", key), pairs);
        self.seconds_late_override
            .append_to(&format!("{}[seconds_late_override]", key), pairs);
    }
}

/// `PUT /courses/{course_id}/assignments/{assignment_id}/submissions/{user_id}`
#[derive(Debug, Clone, Default)]
pub struct GradeSubmission {
    pub path: SubmissionPath,
    pub form: GradeSubmissionForm,
}

#[derive(Debug, Clone, Default)]
pub struct GradeSubmissionForm {
    pub comment: GradeComment,
    pub submission: GradeAttributes,
}

impl GradeSubmission {
    pub fn new(path: SubmissionPath) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    pub fn with_posted_grade(mut self, grade: &str) -> Self {
        self.form.submission.posted_grade = Some(grade.to_string());
        self
    }

    pub fn with_comment(mut self, text: &str) -> Self {
        self.form.comment.text_comment = Some(text.to_string());
        self
    }

    pub fn with_late_policy_status(mut self, status: &str) -> Self {
        self.form.submission.late_policy_status = Some(status.to_string());
        self
    }
}

impl Endpoint for GradeSubmission {
    type Output = Submission;
    const METHOD: Method = Method::PUT;
    const PATH: &'static str =
        "/courses/{course_id}/assignments/{assignment_id}/submissions/{user_id}";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        self.path.params()
    }

    fn body(&self) -> Result<Option<Body>, Error> {
        Ok(Some(Body::Form(
            Params::new()
                .with("comment", &self.form.comment)
                .with("submission", &self.form.submission),
        )))
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.path
            .check()
            .one_of(
                "submission[late_policy_status]",
                &self.form.submission.late_policy_status,
                LATE_POLICY_STATUSES,
            )
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}

/// `PUT .../submissions/{user_id}/read`. Answers 204 No Content.
#[derive(Debug, Clone, Default)]
pub struct MarkSubmissionAsRead {
    pub path: SubmissionPath,
}

impl MarkSubmissionAsRead {
    pub fn new(path: SubmissionPath) -> Self {
        Self { path }
    }
}

impl Endpoint for MarkSubmissionAsRead {
    type Output = ();
    const METHOD: Method = Method::PUT;
    const PATH: &'static str =
        "/courses/{course_id}/assignments/{assignment_id}/submissions/{user_id}/read";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        self.path.params()
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.path.check().finish()
    }

    fn decode(&self, _response: RawResponse) -> Result<Self::Output, Error> {
        Ok(())
    }
}
