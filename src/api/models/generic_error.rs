use rocket::serde::Serialize;

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct GenericError {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>
}

impl GenericError {
    pub fn new(message: String) -> Self {
        GenericError { message, errors: vec![] }
    }
}
