pub mod catalog;
pub mod project;

// Re-export commonly used types
pub use catalog::{Category, Platform};
pub use project::{Contract, Social, Structure, Website};
