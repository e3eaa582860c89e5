use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: i64,

    pub name: String,

    pub position: Option<i64>,

    pub workflow_state: Option<String>,

    pub unlock_at: Option<DateTime<Utc>>,

    pub require_sequential_progress: Option<bool>,

    pub published: Option<bool>,

    pub items_count: Option<i64>,

    /// Present only with `include[]=items`.
    pub items: Option<Vec<ModuleItem>>,

    /// Progress state for the requesting (or `student_id`) user.
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleItem {
    pub id: i64,

    pub module_id: i64,

    pub title: String,

    #[serde(rename = "type")]
    pub item_type: String,

    pub position: Option<i64>,

    pub content_id: Option<i64>,

    pub html_url: Option<String>,

    pub published: Option<bool>,

    pub completion_requirement: Option<CompletionRequirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequirement {
    #[serde(rename = "type")]
    pub requirement_type: String,

    pub min_score: Option<f64>,

    pub completed: Option<bool>,
}
