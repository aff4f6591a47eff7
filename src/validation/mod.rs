mod categories;
mod contracts;
mod error;
mod fields;
mod keys;
mod social;
mod structure;
mod validator;
mod websites;

#[cfg(test)]
mod tests;

pub use contracts::is_hex_address;
pub use error::{ErrorKind, ValidationError};
pub use keys::{CONTRACT_KEYS, ROOT_KEYS, WEBSITE_KEYS};
// Re-export the main Validator
pub use validator::{Validator, validate_structure};
