use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,

    pub assignment_id: i64,

    pub user_id: i64,

    pub attempt: Option<i64>,

    pub score: Option<f64>,

    pub grade: Option<String>,

    pub submitted_at: Option<DateTime<Utc>>,

    pub graded_at: Option<DateTime<Utc>>,

    pub workflow_state: Option<String>,

    pub late: Option<bool>,

    pub excused: Option<bool>,

    pub missing: Option<bool>,

    #[serde(default)]
    pub submission_comments: Vec<SubmissionComment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionComment {
    pub id: i64,

    pub author_id: Option<i64>,

    pub author_name: Option<String>,

    pub comment: String,

    pub created_at: Option<DateTime<Utc>>,
}
