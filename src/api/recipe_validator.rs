use crate::api::models::ValidationResult;
use crate::api::models::recipes::Recipe;

const NAME_REQUIRED_ERROR: &str = "Recipe name is required";
const SERVINGS_ERROR: &str = "Servings must be greater than 0";
const CALORIES_ERROR: &str = "Calories must be greater than 0";
const NO_INGREDIENTS_ERROR: &str = "At least one ingredient is required";
const NO_INSTRUCTIONS_ERROR: &str = "At least one instruction is required";

/// Checks `candidate` against `baseline`, the recipe it was edited from.
///
/// A baseline without an id means the candidate is a new recipe and every rule applies.
/// When editing, name, servings, calories and each ingredient or instruction are only
/// judged if they differ from the baseline, so pre-existing data the user did not touch
/// never blocks a save. Collection emptiness and macros are always judged.
///
/// Errors come out in rule order: name, servings, calories, ingredients, instructions, macros.
pub fn validate(candidate: &Recipe, baseline: &Recipe) -> ValidationResult {
    let check_all = baseline.is_new();
    let mut errors = vec![];

    if (check_all || candidate.name != baseline.name) && candidate.name.trim().is_empty() {
        errors.push(NAME_REQUIRED_ERROR.to_string());
    }
    if (check_all || candidate.servings != baseline.servings) && candidate.servings <= 0 {
        errors.push(SERVINGS_ERROR.to_string());
    }
    if (check_all || candidate.calories != baseline.calories) && !(candidate.calories > 0.0) {
        errors.push(CALORIES_ERROR.to_string());
    }

    if candidate.ingredients.is_empty() {
        errors.push(NO_INGREDIENTS_ERROR.to_string());
    }
    for (index, ingredient) in candidate.ingredients.iter().enumerate() {
        if !check_all && !is_touched_at(&candidate.ingredients, &baseline.ingredients, index) {
            continue;
        }
        let position = index + 1;
        if ingredient.name.trim().is_empty() {
            errors.push(format!("Ingredient {} name is required", position));
        }
        if !(ingredient.quantity > 0.0) {
            errors.push(format!("Ingredient {} quantity must be greater than 0", position));
        }
        if ingredient.unit.trim().is_empty() {
            errors.push(format!("Ingredient {} unit is required", position));
        }
    }

    if candidate.instructions.is_empty() {
        errors.push(NO_INSTRUCTIONS_ERROR.to_string());
    }
    for (index, instruction) in candidate.instructions.iter().enumerate() {
        if !check_all && !is_touched_at(&candidate.instructions, &baseline.instructions, index) {
            continue;
        }
        if instruction.trim().is_empty() {
            errors.push(format!("Instruction {} cannot be empty", index + 1));
        }
    }

    let macros = [("Fat", &candidate.fat), ("Carbs", &candidate.carbs), ("Protein", &candidate.protein)];
    for (label, nutrient) in macros {
        if let Some(nutrient) = nutrient {
            if !nutrient.is_valid() {
                errors.push(format!("{} macro must have valid amount and unit", label));
            }
        }
    }

    ValidationResult::from_errors(errors)
}

/// Entries are matched to the baseline purely by position, so moving an entry marks
/// every shifted slot as touched. Swap this out to diff by content instead.
pub fn is_touched_at<T: PartialEq>(entries: &[T], baseline: &[T], index: usize) -> bool {
    match (entries.get(index), baseline.get(index)) {
        (Some(entry), Some(original)) => entry != original,
        (Some(_), None) => true,
        (None, _) => false
    }
}
