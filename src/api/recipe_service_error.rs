#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecipeServiceError {
    /// The submitted recipe broke one or more rules; every message is meant for the user.
    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Storage(String)
}
