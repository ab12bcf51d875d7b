use rocket::serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        ValidationResult { is_valid: errors.is_empty(), errors }
    }
}
