use std::fs;
use crate::api::ResourceService;

pub struct ResourceServiceFactory {}

impl ResourceServiceFactory {
    /// Loads `STRINGS_FILE_PATH` (relative to the home directory) when set, otherwise the bundled strings.
    pub fn create() -> Result<ResourceService, String> {
        let strings_file_path = match dotenv::var("STRINGS_FILE_PATH") {
            Ok(strings_file_path) => strings_file_path,
            Err(_) => return ResourceService::bundled()
        };
        let home_dir = dirs::home_dir().ok_or_else(|| String::from("Couldn't determine the home directory"))?;
        let file_path = home_dir.join(strings_file_path);
        log::info!("Loading message resources from \"{}\"", file_path.display());
        match fs::read_to_string(&file_path) {
            Ok(content) => ResourceService::from_json(&content),
            Err(error) => Err(format!("Couldn't read message resources \"{}\": {}", file_path.display(), error))
        }
    }
}
