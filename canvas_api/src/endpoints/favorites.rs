//! Favorites of the calling user.

use reqwest::Method;

use crate::{
    endpoint::Endpoint,
    response::RawResponse,
    types::Favorite,
    validation::{ValidationErrors, Validator},
    Error,
};

/// `POST /users/self/favorites/courses/{id}`
#[derive(Debug, Clone, Default)]
pub struct AddCourseToFavorites {
    pub path: AddCourseToFavoritesPath,
}

#[derive(Debug, Clone, Default)]
pub struct AddCourseToFavoritesPath {
    pub id: String,
}

impl AddCourseToFavorites {
    pub fn new(id: impl ToString) -> Self {
        Self {
            path: AddCourseToFavoritesPath { id: id.to_string() },
        }
    }
}

impl Endpoint for AddCourseToFavorites {
    type Output = Favorite;
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/users/self/favorites/courses/{id}";

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.path.id.clone())]
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new().required("id", &self.path.id).finish()
    }

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        response.json()
    }
}

/// `DELETE /users/self/favorites/courses`: restores the default course list.
///
/// The server answers with the bare text `true`; anything else is `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetCourseFavorites;

impl Endpoint for ResetCourseFavorites {
    type Output = bool;
    const METHOD: Method = Method::DELETE;
    const PATH: &'static str = "/users/self/favorites/courses";

    fn decode(&self, response: RawResponse) -> Result<Self::Output, Error> {
        Ok(response.literal("true"))
    }
}
