use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,

    pub name: Option<String>,

    pub course_code: Option<String>,

    pub workflow_state: Option<String>,

    pub account_id: Option<i64>,

    pub enrollment_term_id: Option<i64>,

    pub sis_course_id: Option<String>,

    pub start_at: Option<DateTime<Utc>>,

    pub end_at: Option<DateTime<Utc>>,

    pub default_view: Option<String>,

    pub is_public: Option<bool>,

    pub license: Option<String>,

    pub syllabus_body: Option<String>,

    pub total_students: Option<i64>,

    pub term: Option<CourseTerm>,
}

/// Returned when `include[]=term` is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseTerm {
    pub id: i64,

    pub name: String,

    pub start_at: Option<DateTime<Utc>>,

    pub end_at: Option<DateTime<Utc>>,
}
