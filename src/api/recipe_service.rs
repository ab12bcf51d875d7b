use std::fs;
use std::path::Path;
use std::sync::{ RwLock, RwLockReadGuard, RwLockWriteGuard };
use std::time::{ SystemTime, UNIX_EPOCH };
use serde_json::json;
use uuid::Uuid;
use crate::api::models::recipes::Recipe;
use crate::api::{ normalize, validate, NormalizedRecipe, RecipeServiceError, ResourceService };

pub struct RecipeService {
    resource_service: ResourceService,
    recipes: RwLock<Vec<Recipe>>,
    recipes_file_path: Box<Path>
}

impl RecipeService {
    pub fn new(resource_service: ResourceService, recipes: Vec<Recipe>, recipes_file_path: Box<Path>) -> RecipeService {
        RecipeService { resource_service, recipes: RwLock::new(recipes), recipes_file_path }
    }

    /// Newest first.
    pub fn list(&self) -> Vec<Recipe> {
        let mut recipes = self.read().clone();
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recipes
    }

    pub fn get(&self, id: &str) -> Result<Recipe, RecipeServiceError> {
        match self.read().iter().find(|recipe| recipe.id == id) {
            Some(recipe) => Ok(recipe.clone()),
            None => Err(self.not_found(id))
        }
    }

    pub fn create(&self, candidate: &Recipe) -> Result<Recipe, RecipeServiceError> {
        let baseline = Recipe::draft();
        let normalized = self.validate_and_normalize(candidate, &baseline, false)?;
        let mut recipe = normalized.into_recipe();
        recipe.id = Self::derive_id(&recipe);
        let now = Self::now();
        recipe.created_at = Some(now);
        recipe.updated_at = Some(now);

        let mut recipes = self.write();
        if recipes.iter().any(|existing| existing.id == recipe.id) {
            let message = self.resource_service.render("recipe_conflict_error_message_template", &json!({ "id": recipe.id }));
            return Err(RecipeServiceError::Conflict(message));
        }
        let mut updated_recipes = recipes.clone();
        updated_recipes.push(recipe.clone());
        self.save(&updated_recipes)?;
        *recipes = updated_recipes;

        log::info!("{}", self.resource_service.render("created_recipe_info_message_template", &json!({ "id": recipe.id, "name": recipe.name })));
        Ok(recipe)
    }

    pub fn update(&self, id: &str, candidate: &Recipe) -> Result<Recipe, RecipeServiceError> {
        let mut recipes = self.write();
        let index = match recipes.iter().position(|recipe| recipe.id == id) {
            Some(index) => index,
            None => return Err(self.not_found(id))
        };
        let normalized = self.validate_and_normalize(candidate, &recipes[index], true)?;
        let mut recipe = normalized.into_recipe();
        recipe.updated_at = Some(Self::now());

        let mut updated_recipes = recipes.clone();
        updated_recipes[index] = recipe.clone();
        self.save(&updated_recipes)?;
        *recipes = updated_recipes;

        log::info!("{}", self.resource_service.render("updated_recipe_info_message_template", &json!({ "id": recipe.id, "name": recipe.name })));
        Ok(recipe)
    }

    pub fn delete(&self, id: &str) -> Result<(), RecipeServiceError> {
        let mut recipes = self.write();
        if !recipes.iter().any(|recipe| recipe.id == id) {
            return Err(self.not_found(id));
        }
        let updated_recipes: Vec<Recipe> = recipes.iter().filter(|recipe| recipe.id != id).cloned().collect();
        self.save(&updated_recipes)?;
        *recipes = updated_recipes;

        log::info!("{}", self.resource_service.render("deleted_recipe_info_message_template", &json!({ "id": id })));
        Ok(())
    }

    fn validate_and_normalize(&self, candidate: &Recipe, baseline: &Recipe, is_edit: bool) -> Result<NormalizedRecipe, RecipeServiceError> {
        let validation = validate(candidate, baseline);
        if !validation.is_valid {
            let message_data = &json!({ "count": validation.errors.len() });
            log::info!("{}", self.resource_service.render("rejected_recipe_info_message_template", message_data));
            return Err(RecipeServiceError::Invalid(validation.errors));
        }
        Ok(normalize(candidate, baseline, is_edit))
    }

    fn save(&self, recipes: &[Recipe]) -> Result<(), RecipeServiceError> {
        let recipes_json = serde_json::to_string_pretty(recipes)
            .map_err(|error| self.storage_error("recipes_serialization_error_message_template", error))?;
        if let Some(parent) = self.recipes_file_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|error| self.storage_error("create_recipes_directory_error_message_template", error))?;
        }
        fs::write(&self.recipes_file_path, recipes_json)
            .map_err(|error| self.storage_error("write_to_recipes_file_error_message_template", error))?;
        let message_data = &json!({ "count": recipes.len(), "path": self.recipes_file_path.display().to_string() });
        log::debug!("{}", self.resource_service.render("saved_recipes_debug_message_template", message_data));
        Ok(())
    }

    /// Recipes imported from a post share that post's id, so re-importing it is detected.
    fn derive_id(recipe: &Recipe) -> String {
        match recipe.url.as_deref().filter(|url| !url.trim().is_empty()) {
            Some(url) => Uuid::new_v5(&Uuid::NAMESPACE_URL, url.as_bytes()).to_string(),
            None => Uuid::new_v4().to_string()
        }
    }

    fn now() -> u64 {
        SystemTime::now().duration_since(UNIX_EPOCH).map(|elapsed| elapsed.as_secs()).unwrap_or_default()
    }

    fn not_found(&self, id: &str) -> RecipeServiceError {
        RecipeServiceError::NotFound(self.resource_service.render("recipe_not_found_error_message_template", &json!({ "id": id })))
    }

    fn storage_error(&self, name: &str, error: impl std::fmt::Display) -> RecipeServiceError {
        let message = self.resource_service.message(name) + &error.to_string();
        log::error!("{}", message);
        RecipeServiceError::Storage(message)
    }

    // A panic mid-mutation never leaves partial state behind, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Recipe>> {
        self.recipes.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Recipe>> {
        self.recipes.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::recipes::{ Ingredient, Macro };
    use crate::api::RecipeServiceFactory;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> RecipeService {
        let resource_service = ResourceService::bundled().expect("bundled strings are valid json");
        RecipeServiceFactory::create_at(resource_service, dir.path().join("recipes.json")).expect("store opens")
    }

    fn pancakes() -> Recipe {
        Recipe {
            name: " Pancakes ".to_string(),
            url: Some("https://www.instagram.com/p/pancakes".to_string()),
            servings: 2,
            calories: 350.0,
            protein: Some(Macro::new(12.0, "g")),
            ingredients: vec![Ingredient::new("Flour", 200.0, "g"), Ingredient::new("Milk", 300.0, "ml")],
            instructions: vec!["Mix".to_string(), "Fry".to_string()],
            ..Recipe::draft()
        }
    }

    #[test]
    fn create_assigns_id_and_timestamps() {
        let dir = TempDir::new().expect("temp dir");
        let service = service_in(&dir);
        let created = service.create(&pancakes()).expect("valid recipe");

        let expected_id = Uuid::new_v5(&Uuid::NAMESPACE_URL, b"https://www.instagram.com/p/pancakes").to_string();
        assert_eq!(created.id, expected_id);
        assert_eq!(created.name, "Pancakes");
        assert!(created.created_at.is_some());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.protein, Some(Macro::new(12.0, "g")));
        assert_eq!(service.get(&created.id), Ok(created));
    }

    #[test]
    fn create_without_url_gets_random_id() {
        let dir = TempDir::new().expect("temp dir");
        let service = service_in(&dir);
        let first = service.create(&Recipe { url: None, ..pancakes() }).expect("valid recipe");
        let second = service.create(&Recipe { url: None, ..pancakes() }).expect("valid recipe");
        assert_ne!(first.id, second.id);
        assert_eq!(service.list().len(), 2);
    }

    #[test]
    fn create_rejects_invalid_recipe_without_saving() {
        let dir = TempDir::new().expect("temp dir");
        let service = service_in(&dir);
        let candidate = Recipe { servings: 0, ..pancakes() };
        assert_eq!(
            service.create(&candidate),
            Err(RecipeServiceError::Invalid(vec!["Servings must be greater than 0".to_string()]))
        );
        assert!(service.list().is_empty());
        assert!(!dir.path().join("recipes.json").exists());
    }

    #[test]
    fn id_is_hashed_from_the_stored_url() {
        let dir = TempDir::new().expect("temp dir");
        let service = service_in(&dir);
        let padded = service.create(&Recipe { url: Some(" https://x ".to_string()), ..pancakes() }).expect("valid recipe");
        assert_eq!(padded.url.as_deref(), Some(" https://x "));
        assert_eq!(padded.id, Uuid::new_v5(&Uuid::NAMESPACE_URL, b" https://x ").to_string());

        let plain = service.create(&Recipe { url: Some("https://x".to_string()), ..pancakes() }).expect("distinct url");
        assert_ne!(plain.id, padded.id);

        let blank = service.create(&Recipe { url: Some("   ".to_string()), ..pancakes() }).expect("valid recipe");
        assert_ne!(blank.id, Uuid::new_v5(&Uuid::NAMESPACE_URL, b"   ").to_string());
    }

    #[test]
    fn create_same_url_twice_conflicts() {
        let dir = TempDir::new().expect("temp dir");
        let service = service_in(&dir);
        service.create(&pancakes()).expect("valid recipe");
        assert!(matches!(service.create(&pancakes()), Err(RecipeServiceError::Conflict(_))));
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn update_keeps_immutable_fields_and_skips_untouched_data() {
        let dir = TempDir::new().expect("temp dir");
        let service = service_in(&dir);
        let created = service.create(&pancakes()).expect("valid recipe");

        let mut edited = created.clone();
        edited.id = "something-else".to_string();
        edited.url = None;
        edited.created_at = Some(0);
        edited.name = "Fluffy Pancakes  ".to_string();
        edited.instructions.push("  Serve warm ".to_string());

        let updated = service.update(&created.id, &edited).expect("valid edit");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.url, created.url);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Fluffy Pancakes");
        assert_eq!(updated.instructions, vec!["Mix", "Fry", "Serve warm"]);
        assert_eq!(service.get(&created.id), Ok(updated));
    }

    #[test]
    fn update_reports_changed_invalid_fields() {
        let dir = TempDir::new().expect("temp dir");
        let service = service_in(&dir);
        let created = service.create(&pancakes()).expect("valid recipe");
        let edited = Recipe { calories: 0.0, ingredients: vec![], ..created.clone() };
        assert_eq!(
            service.update(&created.id, &edited),
            Err(RecipeServiceError::Invalid(vec![
                "Calories must be greater than 0".to_string(),
                "At least one ingredient is required".to_string()
            ]))
        );
        assert_eq!(service.get(&created.id), Ok(created));
    }

    #[test]
    fn missing_recipes_are_not_found() {
        let dir = TempDir::new().expect("temp dir");
        let service = service_in(&dir);
        assert!(matches!(service.get("nope"), Err(RecipeServiceError::NotFound(_))));
        assert!(matches!(service.update("nope", &pancakes()), Err(RecipeServiceError::NotFound(_))));
        assert!(matches!(service.delete("nope"), Err(RecipeServiceError::NotFound(_))));
    }

    #[test]
    fn delete_removes_recipe() {
        let dir = TempDir::new().expect("temp dir");
        let service = service_in(&dir);
        let created = service.create(&pancakes()).expect("valid recipe");
        service.delete(&created.id).expect("deleted");
        assert!(service.list().is_empty());
        assert!(matches!(service.get(&created.id), Err(RecipeServiceError::NotFound(_))));
    }

    #[test]
    fn recipes_survive_a_restart() {
        let dir = TempDir::new().expect("temp dir");
        let created = service_in(&dir).create(&pancakes()).expect("valid recipe");
        let reopened = service_in(&dir);
        assert_eq!(reopened.list(), vec![created]);
    }

    #[test]
    fn list_is_newest_first() {
        let dir = TempDir::new().expect("temp dir");
        let resource_service = ResourceService::bundled().expect("bundled strings are valid json");
        let older = Recipe { id: "old".to_string(), created_at: Some(10), ..pancakes() };
        let newer = Recipe { id: "new".to_string(), created_at: Some(20), ..pancakes() };
        let service = RecipeService::new(resource_service, vec![older, newer], dir.path().join("recipes.json").into_boxed_path());
        let ids: Vec<String> = service.list().into_iter().map(|recipe| recipe.id).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }
}
