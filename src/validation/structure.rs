use anyhow::{Context, Result};
use jsonschema::error::ValidationErrorKind;
use serde_json::Value;
use tracing::debug;

use super::error::{ErrorKind, ValidationError};
use crate::models::Structure;

// Use JSON Schema draft-07 with format assertions enabled (needed for `email`)
use jsonschema::draft7 as schema_draft;

// Embed the schema at compile time
const PROJECT_SCHEMA: &str = include_str!("../../schemas/v1/project-schema.json");

pub fn get_project_schema() -> Result<Value, serde_json::Error> {
    serde_json::from_str(PROJECT_SCHEMA)
}

/// Struct-level pass: required fields and formats on the typed document.
///
/// Overlaps the field checks; its findings are reported
/// alongside them.
pub struct StructureValidator {
    schema: jsonschema::Validator,
}

impl StructureValidator {
    pub fn new() -> Result<Self> {
        let schema = get_project_schema().context("Failed to parse project schema")?;
        let schema = schema_draft::options()
            .should_validate_formats(true)
            .build(&schema)
            .context("Failed to compile project schema")?;

        Ok(Self { schema })
    }

    pub fn validate(&self, structure: &Structure, errors: &mut Vec<ValidationError>) {
        let instance = match serde_json::to_value(structure) {
            Ok(instance) => instance,
            Err(e) => {
                errors.push(ValidationError::Structure {
                    kind: ErrorKind::Schema,
                    location: "/".to_string(),
                    detail: e.to_string(),
                });
                return;
            }
        };

        let before = errors.len();
        for error in self.schema.iter_errors(&instance) {
            let kind = match &error.kind {
                ValidationErrorKind::Required { .. } | ValidationErrorKind::MinLength { .. } => {
                    ErrorKind::RequiredField
                }
                ValidationErrorKind::Format { .. } => ErrorKind::Format,
                _ => ErrorKind::Schema,
            };

            let location = error.instance_path.to_string();
            errors.push(ValidationError::Structure {
                kind,
                location: if location.is_empty() {
                    "/".to_string()
                } else {
                    location
                },
                detail: error.to_string(),
            });
        }

        debug!(
            "Struct-level pass found {} problem(s)",
            errors.len() - before
        );
    }
}
