pub mod models;
pub mod validation;

pub use validation::{ErrorKind, ValidationError, Validator, validate_structure};
