use std::ops::Deref;
use rocket::serde::Serialize;
use crate::api::models::recipes::{ Ingredient, Macro, Recipe };

/// A recipe in the exact shape that gets persisted. Only `normalize` builds one.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde", transparent)]
pub struct NormalizedRecipe(Recipe);

impl NormalizedRecipe {
    pub fn into_recipe(self) -> Recipe {
        self.0
    }
}

impl Deref for NormalizedRecipe {
    type Target = Recipe;

    fn deref(&self) -> &Recipe {
        &self.0
    }
}

/// Cleans a candidate that already passed validation into its persisted form.
///
/// Blank entries are dropped rather than reported, so calling this on unvalidated
/// input quietly yields a smaller recipe. On the edit path the id, source urls and
/// creation time always come from `baseline`.
pub fn normalize(candidate: &Recipe, baseline: &Recipe, is_edit: bool) -> NormalizedRecipe {
    let mut recipe = Recipe {
        name: candidate.name.trim().to_string(),
        fat: filled_macro(&candidate.fat),
        carbs: filled_macro(&candidate.carbs),
        protein: filled_macro(&candidate.protein),
        ingredients: candidate.ingredients.iter()
            .filter(|ingredient| ingredient.is_complete())
            .map(|ingredient| Ingredient {
                name: ingredient.name.trim().to_string(),
                quantity: ingredient.quantity,
                unit: ingredient.unit.trim().to_string()
            })
            .collect(),
        instructions: candidate.instructions.iter()
            .map(|instruction| instruction.trim())
            .filter(|instruction| !instruction.is_empty())
            .map(str::to_string)
            .collect(),
        ..candidate.clone()
    };
    if is_edit {
        recipe.id = baseline.id.clone();
        recipe.url = baseline.url.clone();
        recipe.image_url = baseline.image_url.clone();
        recipe.created_at = baseline.created_at;
    }
    NormalizedRecipe(recipe)
}

fn filled_macro(nutrient: &Option<Macro>) -> Option<Macro> {
    nutrient.as_ref().filter(|nutrient| !nutrient.is_blank()).cloned()
}
