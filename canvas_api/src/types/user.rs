use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub name: String,

    pub sortable_name: Option<String>,

    pub short_name: Option<String>,

    pub sis_user_id: Option<String>,

    pub login_id: Option<String>,

    pub email: Option<String>,

    pub avatar_url: Option<String>,

    pub locale: Option<String>,

    pub time_zone: Option<String>,
}
