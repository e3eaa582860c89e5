use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMembership {
    pub id: i64,

    pub group_id: i64,

    pub user_id: i64,

    pub workflow_state: Option<String>,

    pub moderator: Option<bool>,
}
