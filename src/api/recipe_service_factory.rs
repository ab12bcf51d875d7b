use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use serde_json::json;
use crate::api::models::recipes::Recipe;
use crate::api::{ RecipeService, ResourceService };

const DEFAULT_RECIPES_FILE_PATH: &str = ".recipe-box/recipes.json";

pub struct RecipeServiceFactory {}

impl RecipeServiceFactory {
    /// Opens the store at `RECIPES_FILE_PATH`, relative to the home directory.
    pub fn create(resource_service: ResourceService) -> Result<RecipeService, String> {
        let home_dir = dirs::home_dir().ok_or_else(|| resource_service.message("missing_home_directory_error_message"))?;
        let recipes_file_path = dotenv::var("RECIPES_FILE_PATH").unwrap_or_else(|_| DEFAULT_RECIPES_FILE_PATH.to_string());
        Self::create_at(resource_service, home_dir.join(recipes_file_path))
    }

    pub fn create_at(resource_service: ResourceService, file_path: PathBuf) -> Result<RecipeService, String> {
        let message_data = &json!({ "path": file_path.display().to_string() });
        log::info!("{}", resource_service.render("loading_recipes_info_message_template", message_data));
        let recipes: Vec<Recipe> = match fs::read_to_string(&file_path) {
            Ok(existing_recipes_json) => match serde_json::from_str(&existing_recipes_json) {
                Ok(recipes) => recipes,
                Err(error) => return Err(resource_service.message("recipes_deserialization_error_message_template") + &error.to_string())
            },
            Err(error) if error.kind() == ErrorKind::NotFound => {
                log::info!("{}", resource_service.render("no_recipes_file_info_message_template", message_data));
                vec![]
            },
            Err(error) => return Err(resource_service.message("read_recipes_file_error_message_template") + &error.to_string())
        };
        log::info!("{}", resource_service.render("loaded_recipes_info_message_template", &json!({ "count": recipes.len() })));

        Ok(RecipeService::new(resource_service, recipes, file_path.into_boxed_path()))
    }
}
