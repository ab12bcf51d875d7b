use std::collections::HashMap;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

const BUNDLED_STRINGS: &str = include_str!("../../resources/strings.json");

#[derive(Clone)]
pub struct ResourceService {
    resources: HashMap<String, String>
}

impl ResourceService {
    pub fn new(resources: HashMap<String, String>) -> ResourceService {
        ResourceService {
            resources
        }
    }

    pub fn from_json(content: &str) -> Result<ResourceService, String> {
        match serde_json::from_str(content) {
            Ok(resources) => Ok(ResourceService::new(resources)),
            Err(error) => Err(format!("Couldn't parse message resources: {}", error))
        }
    }

    pub fn bundled() -> Result<ResourceService, String> {
        ResourceService::from_json(BUNDLED_STRINGS)
    }

    pub fn get_resource_string_by_name(&self, name: &str) -> Option<String> {
        self.resources.get(name).cloned()
    }

    pub fn render_resource_template_string_by_name<T: Serialize>(&self, name: &str, data: &T) -> Option<String> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        let template_string = self.get_resource_string_by_name(name)?;
        match handlebars.render_template(template_string.as_str(), data) {
            Ok(rendered) => Some(rendered),
            Err(_) => None
        }
    }

    /// Like `get_resource_string_by_name`, falling back to the name itself.
    pub fn message(&self, name: &str) -> String {
        match self.get_resource_string_by_name(name) {
            Some(message) => message,
            None => self.missing(name)
        }
    }

    /// Like `render_resource_template_string_by_name`, falling back to the name itself.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        match self.render_resource_template_string_by_name(name, data) {
            Some(rendered) => rendered,
            None => self.missing(name)
        }
    }

    fn missing(&self, name: &str) -> String {
        if let Some(warning) = self.render_resource_template_string_by_name("missing_resource_warning_message_template", &json!({ "name": name })) {
            log::warn!("{}", warning);
        }
        name.to_string()
    }
}
