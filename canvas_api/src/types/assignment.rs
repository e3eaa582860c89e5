use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,

    pub course_id: i64,

    pub name: String,

    pub description: Option<String>,

    pub due_at: Option<DateTime<Utc>>,

    pub lock_at: Option<DateTime<Utc>>,

    pub unlock_at: Option<DateTime<Utc>>,

    pub points_possible: Option<f64>,

    pub grading_type: Option<String>,

    #[serde(default)]
    pub submission_types: Vec<String>,

    pub published: Option<bool>,

    pub position: Option<i64>,

    pub html_url: Option<String>,

    pub needs_grading_count: Option<i64>,
}
