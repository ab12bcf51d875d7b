mod api;

#[macro_use] extern crate rocket;
extern crate env_logger;
use rocket::{ Build, Rocket, State };
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use crate::api::models::{ GenericError, GenericMessage, HealthStatus, ValidationRequest, ValidationResult };
use crate::api::models::recipes::Recipe;
use crate::api::{ validate, RecipeService, RecipeServiceError, RecipeServiceFactory, ResourceService, ResourceServiceFactory };

type ApiResult<T> = Result<T, status::Custom<Json<GenericError>>>;

#[get("/health")]
fn health_get() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

#[get("/recipes")]
fn recipes_get(recipe_service: &State<RecipeService>) -> Json<Vec<Recipe>> {
    Json(recipe_service.list())
}

#[get("/recipes/<id>")]
fn recipe_get(recipe_service: &State<RecipeService>, resource_service: &State<ResourceService>, id: &str) -> ApiResult<Json<Recipe>> {
    match recipe_service.get(id) {
        Ok(recipe) => Ok(Json(recipe)),
        Err(error) => Err(error_response(resource_service, error))
    }
}

#[post("/recipes", format = "json", data = "<recipe>")]
fn recipes_post(recipe_service: &State<RecipeService>, resource_service: &State<ResourceService>, recipe: Json<Recipe>) -> ApiResult<status::Created<Json<Recipe>>> {
    match recipe_service.create(&recipe) {
        Ok(created) => Ok(status::Created::new(format!("/recipes/{}", created.id)).body(Json(created))),
        Err(error) => Err(error_response(resource_service, error))
    }
}

#[put("/recipes/<id>", format = "json", data = "<recipe>")]
fn recipe_put(recipe_service: &State<RecipeService>, resource_service: &State<ResourceService>, id: &str, recipe: Json<Recipe>) -> ApiResult<Json<Recipe>> {
    match recipe_service.update(id, &recipe) {
        Ok(updated) => Ok(Json(updated)),
        Err(error) => Err(error_response(resource_service, error))
    }
}

#[delete("/recipes/<id>")]
fn recipe_delete(recipe_service: &State<RecipeService>, resource_service: &State<ResourceService>, id: &str) -> ApiResult<Json<GenericMessage>> {
    match recipe_service.delete(id) {
        Ok(()) => Ok(Json(GenericMessage { message: resource_service.message("recipe_deleted_message") })),
        Err(error) => Err(error_response(resource_service, error))
    }
}

// Lets a form show problems while the user is still typing.
#[post("/recipes/validate", format = "json", data = "<request>")]
fn recipes_validate_post(request: Json<ValidationRequest>) -> Json<ValidationResult> {
    let request = request.into_inner();
    let baseline = request.baseline.unwrap_or_else(Recipe::draft);
    Json(validate(&request.candidate, &baseline))
}

fn error_response(resource_service: &ResourceService, error: RecipeServiceError) -> status::Custom<Json<GenericError>> {
    match error {
        RecipeServiceError::Invalid(errors) => status::Custom(Status::BadRequest, Json(GenericError {
            message: resource_service.message("validation_failed_error_message"),
            errors
        })),
        RecipeServiceError::NotFound(message) => status::Custom(Status::NotFound, Json(GenericError::new(message))),
        RecipeServiceError::Conflict(message) => status::Custom(Status::Conflict, Json(GenericError::new(message))),
        RecipeServiceError::Storage(message) => status::Custom(Status::InternalServerError, Json(GenericError::new(message)))
    }
}

fn build_rocket(resource_service: ResourceService, recipe_service: RecipeService) -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![health_get, recipes_get, recipe_get, recipes_post, recipe_put, recipe_delete, recipes_validate_post])
        .manage(resource_service)
        .manage(recipe_service)
}

#[launch]
fn rocket() -> _ {
    env_logger::init();
    let resource_service = match ResourceServiceFactory::create() {
        Ok(resource_service) => resource_service,
        Err(error) => panic!("Couldn't load message resources: {}", error)
    };
    let recipe_service = match RecipeServiceFactory::create(resource_service.clone()) {
        Ok(recipe_service) => recipe_service,
        Err(error) => panic!("Couldn't create recipe service: {}", error)
    };
    build_rocket(resource_service, recipe_service)
}
