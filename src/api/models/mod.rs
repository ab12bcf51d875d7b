mod generic_error;
mod generic_message;
mod health_status;
mod validation_request;
mod validation_result;
pub mod recipes;

pub use generic_error::*;
pub use generic_message::*;
pub use health_status::*;
pub use validation_request::*;
pub use validation_result::*;
