//! Course endpoints.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;

use crate::{
    endpoint::{Body, Endpoint},
    paging::Paged,
    params::{ParamValue, Params},
    response::RawResponse,
    types::Course,
    validation::{ValidationErrors, Validator},
    Error,
};

pub const COURSE_INCLUDES: &[&str] = &[
    "needs_grading_count",
    "syllabus_body",
    "public_description",
    "total_scores",
    "current_grading_period_scores",
    "grading_periods",
    "term",
    "account",
    "course_progress",
    "sections",
    "storage_quota_used_mb",
    "total_students",
    "passback_status",
    "favorites",
    "teachers",
    "observed_users",
    "course_image",
    "banner_image",
    "concluded",
];

pub const COURSE_ENROLLMENT_TYPES: &[&str] = &["teacher", "student", "ta", "observer", "designer"];

pub const COURSE_ENROLLMENT_STATES: &[&str] = &["active", "invited_or_pending", "completed"];

pub const COURSE_STATES: &[&str] = &["unpublished", "available", "completed", "deleted"];

pub const COURSE_DEFAULT_VIEWS: &[&str] = &["feed", "wiki", "modules", "syllabus", "assignments"];

pub const COURSE_LICENSES: &[&str] = &[
    "private",
    "cc_by_nc_nd",
    "cc_by_nc_sa",
    "cc_by_nc",
    "cc_by_nd",
    "cc_by_sa",
    "cc_by",
    "public_domain",
];

pub const COURSE_EVENTS: &[&str] = &["claim", "offer", "conclude", "delete", "undelete"];

pub const DELETE_COURSE_EVENTS: &[&str] = &["delete", "conclude"];

/// `GET /courses`: courses the caller has an enrollment in.
#[derive(Debug, Clone, Default)]
pub struct ListYourCourses {
    pub query: ListYourCoursesQuery,
}

#[derive(Debug, Clone, Default)]
pub struct ListYourCoursesQuery {
    pub enrollment_type: Option<String>,
    pub enrollment_role_id: Option<i64>,
    pub enrollment_state: Option<String>,
    pub exclude_blueprint_courses: Option<bool>,
    pub include: Vec<String>,
    pub state: Vec<String>,
    pub per_page: Option<i64>,
}

impl ListYourCourses {
    pub fn with_enrollment_type(mut self, enrollment_type: &str) -> Self {
        self.query.enrollment_type = Some(enrollment_type.to_string());
        self
    }

    pub fn with_enrollment_state(mut self, enrollment_state: &str) -> Self {
        self.query.enrollment_state = Some(enrollment_state.to_string());
        self
    }

    pub fn with_include(mut self, include: &str) -> Self {
        self.query.include.push(include.to_string());
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.query.state.push(state.to_string());
        self
    }

    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.query.per_page = Some(per_page);
        self
    }
}

impl Endpoint for ListYourCourses {
    type Output = Paged<Course>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/courses";

    fn query(&self) -> Params {
        Params::new()
            .with("enrollment_type", &self.query.enrollment_type)
            .with("enrollment_role_id", &self.query.enrollment_role_id)
            .with("enrollment_state", &self.query.enrollment_state)
            .with(
                "exclude_blueprint_courses",
                &self.query.exclude_blueprint_courses,
            )
            .with("include", &self.query.include)
            .with("state", &self.query.state)
            .with("per_page", &self.query.per_page)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .one_of(
                "enrollment_type",
                &self.query.enrollment_type,
                COURSE_ENROLLMENT_TYPES,
            )
            .one_of(
                "enrollment_state",
                &self.query.enrollment_state,
                COURSE_ENROLLMENT_STATES,
            )
            .one_of("include[]", &self.query.include, COURSE_INCLUDES)
            .one_of("state[]", &self.query.state, COURSE_STATES)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.paged()
    }
}

/// `GET /courses/{id}`
#[derive(Debug, Clone, Default)]
pub struct GetSingleCourse {
    pub path: CoursePath,
    pub query: GetSingleCourseQuery,
}

/// Path group shared by the single-course endpoints. `id` may be a numeric
/// id or an SIS reference such as `sis_course_id:MATH101`.
#[derive(Debug, Clone, Default)]
pub struct CoursePath {
    pub id: String,
}

#[derive(Debug, Clone, Default)]
pub struct GetSingleCourseQuery {
    pub include: Vec<String>,
    pub teacher_limit: Option<i64>,
}

impl GetSingleCourse {
    pub fn new(id: impl ToString) -> Self {
        Self {
            path: CoursePath { id: id.to_string() },
            ..Self::default()
        }
    }

    pub fn with_include(mut self, include: &str) -> Self {
        self.query.include.push(include.to_string());
        self
    }
}

impl Endpoint for GetSingleCourse {
    type Output = Course;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/courses/{id}";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.path.id.clone())]
    }

    fn query(&self) -> Params {
        Params::new()
            .with("include", &self.query.include)
            .with("teacher_limit", &self.query.teacher_limit)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("id", &self.path.id)
            .one_of("include[]", &self.query.include, COURSE_INCLUDES)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}

/// The `course[...]` group accepted by course create and update.
#[derive(Debug, Clone, Default)]
pub struct CourseAttributes {
    pub name: Option<String>,
    pub course_code: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub license: Option<String>,
    pub is_public: Option<bool>,
    pub default_view: Option<String>,
    pub syllabus_body: Option<String>,
    pub term_id: Option<i64>,
    pub sis_course_id: Option<String>,
}

impl ParamValue for CourseAttributes {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        self.name.append_to(&format!("{}[name]", key), pairs);
        self.course_code
            .append_to(&format!("{}[course_code]", key), pairs);
        self.start_at.append_to(&format!("{}[start_at]", key), pairs);
        self.end_at.append_to(&format!("{}[end_at]", key), pairs);
        self.license.append_to(&format!("{}[license]", key), pairs);
        self.is_public.append_to(&format!("{}[is_public]", key), pairs);
        self.default_view
            .append_to(&format!("{}[default_view]", key), pairs);
        self.syllabus_body
            .append_to(&format!("{}[syllabus_body]", key), pairs);
        self.term_id.append_to(&format!("{}[term_id]", key), pairs);
        self.sis_course_id
            .append_to(&format!("{}[sis_course_id]", key), pairs);
    }
}

impl CourseAttributes {
    fn check(&self, validator: Validator) -> Validator {
        validator
            .one_of("course[license]", &self.license, COURSE_LICENSES)
            .one_of(
                "course[default_view]",
                &self.default_view,
                COURSE_DEFAULT_VIEWS,
            )
    }
}

/// `POST /accounts/{account_id}/courses`
#[derive(Debug, Clone, Default)]
pub struct CreateNewCourse {
    pub path: CreateNewCoursePath,
    pub form: CreateNewCourseForm,
}

#[derive(Debug, Clone, Default)]
pub struct CreateNewCoursePath {
    pub account_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreateNewCourseForm {
    pub course: CourseAttributes,
    /// Publish the course immediately.
    pub offer: Option<bool>,
    /// Enroll the caller as the teacher.
    pub enroll_me: Option<bool>,
    pub enable_sis_reactivation: Option<bool>,
}

impl CreateNewCourse {
    pub fn new(account_id: impl ToString, course: CourseAttributes) -> Self {
        Self {
            path: CreateNewCoursePath {
                account_id: account_id.to_string(),
            },
            form: CreateNewCourseForm {
                course,
                ..CreateNewCourseForm::default()
            },
        }
    }
}

impl Endpoint for CreateNewCourse {
    type Output = Course;
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/accounts/{account_id}/courses";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("account_id", self.path.account_id.clone())]
    }

    fn body(&self) -> Result<Option<Body>, Error> {
        Ok(Some(Body::Form(
            Params::new()
                .with("course", &self.form.course)
                .with("offer", &self.form.offer)
                .with("enroll_me", &self.form.enroll_me)
                .with(
                    "enable_sis_reactivation",
                    &self.form.enable_sis_reactivation,
                ),
        )))
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.form
            .course
            .check(Validator::new().required("account_id", &self.path.account_id))
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}

/// `PUT /courses/{id}`
#[derive(Debug, Clone, Default)]
pub struct UpdateCourse {
    pub path: CoursePath,
    pub form: UpdateCourseForm,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCourseForm {
    pub course: CourseAttributes,
    /// Workflow transition, sent as `course[event]`.
    pub event: Option<String>,
    pub offer: Option<bool>,
}

impl UpdateCourse {
    pub fn new(id: impl ToString, course: CourseAttributes) -> Self {
        Self {
            path: CoursePath { id: id.to_string() },
            form: UpdateCourseForm {
                course,
                ..UpdateCourseForm::default()
            },
        }
    }

    pub fn with_event(mut self, event: &str) -> Self {
        self.form.event = Some(event.to_string());
        self
    }
}

impl Endpoint for UpdateCourse {
    type Output = Course;
    const METHOD: Method = Method::PUT;
    const PATH: &'static str = "/courses/{id}";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.path.id.clone())]
    }

    fn body(&self) -> Result<Option<Body>, Error> {
        Ok(Some(Body::Form(
            Params::new()
                .with("course", &self.form.course)
                .with("course[event]", &self.form.event)
                .with("offer", &self.form.offer),
        )))
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.form
            .course
            .check(Validator::new().required("id", &self.path.id))
            .one_of("course[event]", &self.form.event, COURSE_EVENTS)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}

/// `DELETE /courses/{id}`: deletes or concludes a course depending on `event`.
#[derive(Debug, Clone, Default)]
pub struct DeleteConcludeCourse {
    pub path: CoursePath,
    pub query: DeleteConcludeCourseQuery,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteConcludeCourseQuery {
    /// `delete` or `conclude`. Required.
    pub event: String,
}

/// Which action the server confirmed, and whether it succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseEventOutcome {
    Deleted(bool),
    Concluded(bool),
}

#[derive(Deserialize)]
struct DeleteAck {
    delete: bool,
}

#[derive(Deserialize)]
struct ConcludeAck {
    conclude: bool,
}

impl DeleteConcludeCourse {
    pub fn delete(id: impl ToString) -> Self {
        Self::with_event(id, "delete")
    }

    pub fn conclude(id: impl ToString) -> Self {
        Self::with_event(id, "conclude")
    }

    fn with_event(id: impl ToString, event: &str) -> Self {
        Self {
            path: CoursePath { id: id.to_string() },
            query: DeleteConcludeCourseQuery {
                event: event.to_string(),
            },
        }
    }
}

impl Endpoint for DeleteConcludeCourse {
    type Output = CourseEventOutcome;
    const METHOD: Method = Method::DELETE;
    const PATH: &'static str = "/courses/{id}";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.path.id.clone())]
    }

    fn query(&self) -> Params {
        Params::new().with("event", &self.query.event)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("id", &self.path.id)
            .required("event", &self.query.event)
            .one_of("event", &self.query.event, DELETE_COURSE_EVENTS)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        if self.query.event == "conclude" {
            let ack: ConcludeAck = response.json()?;
            Ok(CourseEventOutcome::Concluded(ack.conclude))
        } else {
            let ack: DeleteAck = response.json()?;
            Ok(CourseEventOutcome::Deleted(ack.delete))
        }
    }
}
