//! Group category endpoints.

use reqwest::Method;

use crate::{
    endpoint::{Body, Endpoint},
    params::Params,
    response::RawResponse,
    types::{GroupMembership, Progress},
    validation::{ValidationErrors, Validator},
    Error,
};

/// `POST /group_categories/{group_category_id}/assign_unassigned_members`
///
/// With `sync` the server assigns members before answering and returns the new
/// memberships; otherwise it queues a job and returns its [`Progress`].
#[derive(Debug, Clone, Default)]
pub struct AssignUnassignedMembers {
    pub path: AssignUnassignedMembersPath,
    pub form: AssignUnassignedMembersForm,
}

#[derive(Debug, Clone, Default)]
pub struct AssignUnassignedMembersPath {
    pub group_category_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct AssignUnassignedMembersForm {
    pub sync: Option<bool>,
}

/// Result shape selected by the request's `sync` flag.
#[derive(Debug, Clone, PartialEq)]
pub enum UnassignedMembersOutcome {
    Memberships(Vec<GroupMembership>),
    Progress(Progress),
}

impl AssignUnassignedMembers {
    pub fn new(group_category_id: impl ToString) -> Self {
        Self {
            path: AssignUnassignedMembersPath {
                group_category_id: group_category_id.to_string(),
            },
            ..Self::default()
        }
    }

    pub fn with_sync(mut self, sync: bool) -> Self {
        self.form.sync = Some(sync);
        self
    }

    fn is_sync(&self) -> bool {
        self.form.sync.unwrap_or(false)
    }
}

impl Endpoint for AssignUnassignedMembers {
    type Output = UnassignedMembersOutcome;
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/group_categories/{group_category_id}/assign_unassigned_members";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("group_category_id", self.path.group_category_id.clone())]
    }

    fn body(&self) -> Result<Option<Body>, Error> {
        Ok(Some(Body::Form(Params::new().with("sync", &self.form.sync))))
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("group_category_id", &self.path.group_category_id)
            .finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        if self.is_sync() {
            response.json().map(UnassignedMembersOutcome::Memberships)
        } else {
            response.json().map(UnassignedMembersOutcome::Progress)
        }
    }
}
