use crate::api::models::recipes::Recipe;
use rocket::serde::Deserialize;

/// A draft to check, optionally against the recipe it was edited from.
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ValidationRequest {
    pub candidate: Recipe,
    #[serde(default)]
    pub baseline: Option<Recipe>
}
