use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,

    pub course_id: i64,

    pub user_id: i64,

    pub course_section_id: Option<i64>,

    /// `StudentEnrollment`, `TeacherEnrollment`, ...
    #[serde(rename = "type")]
    pub enrollment_type: String,

    pub enrollment_state: String,

    pub role: Option<String>,

    pub created_at: Option<DateTime<Utc>>,

    pub last_activity_at: Option<DateTime<Utc>>,

    pub grades: Option<Grades>,

    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grades {
    pub html_url: Option<String>,

    pub current_score: Option<f64>,

    pub final_score: Option<f64>,

    pub current_grade: Option<String>,

    pub final_grade: Option<String>,
}
