use super::error::ValidationError;
use crate::models::Category;

pub fn validate_categories(categories: &[String], errors: &mut Vec<ValidationError>) {
    for (index, value) in categories.iter().enumerate() {
        if Category::from_name(value).is_none() {
            errors.push(ValidationError::InvalidCategory {
                index,
                value: value.clone(),
            });
        }
    }
}
