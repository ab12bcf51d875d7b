mod recipe_validator;
mod recipe_normalizer;
mod recipe_service;
mod recipe_service_error;
mod recipe_service_factory;
mod resource_service;
mod resource_service_factory;
pub mod models;

pub use recipe_validator::*;
pub use recipe_normalizer::*;
pub use recipe_service::*;
pub use recipe_service_error::*;
pub use recipe_service_factory::*;
pub use resource_service::*;
pub use resource_service_factory::*;
