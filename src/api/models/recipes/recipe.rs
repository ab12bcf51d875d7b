use crate::api::models::recipes::{ Ingredient, Macro };
use rocket::serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(crate = "rocket::serde", default)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub servings: i64,
    pub calories: f64,
    pub fat: Option<Macro>,
    pub carbs: Option<Macro>,
    pub protein: Option<Macro>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub created_at: Option<u64>,
    pub updated_at: Option<u64>
}

impl Recipe {
    /// The blank form a new recipe starts from. Also the baseline when validating a creation.
    pub fn draft() -> Self {
        Recipe {
            servings: 1,
            ingredients: vec![Ingredient::default()],
            instructions: vec![String::new()],
            ..Default::default()
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }
}
