use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A long-running server-side job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub id: i64,

    pub context_id: Option<i64>,

    pub context_type: Option<String>,

    pub user_id: Option<i64>,

    pub tag: Option<String>,

    /// Percent complete, 0 to 100.
    pub completion: Option<f64>,

    /// `queued`, `running`, `completed` or `failed`.
    pub workflow_state: String,

    pub message: Option<String>,

    /// API URL for polling this job.
    pub url: Option<String>,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,
}

impl Progress {
    pub fn is_finished(&self) -> bool {
        matches!(self.workflow_state.as_str(), "completed" | "failed")
    }
}
