use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub context_id: i64,

    /// `Course` or `Group`.
    pub context_type: String,
}
