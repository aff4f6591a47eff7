use anyhow::Result;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::categories::validate_categories;
use super::contracts::validate_contracts;
use super::error::ValidationError;
use super::keys::{CONTRACT_KEYS, WEBSITE_KEYS, check_entry_keys, check_root_keys};
use super::social::validate_social;
use super::structure::StructureValidator;
use super::websites::validate_websites;
use crate::models::Structure;

/// Validates ecosystem project documents.
///
/// Holds the compiled schema for the struct-level pass, so one instance can
/// check any number of documents.
pub struct Validator {
    structure_validator: StructureValidator,
}

impl Validator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            structure_validator: StructureValidator::new()?,
        })
    }

    /// Check `json` and return every problem found, in a stable order.
    ///
    /// A document that cannot be decoded yields exactly one
    /// [`ValidationError::Parse`] and nothing else. An empty result means the
    /// document is valid.
    pub fn validate(&self, json: &[u8]) -> Vec<ValidationError> {
        let raw: Map<String, Value> = match serde_json::from_slice(json) {
            Ok(raw) => raw,
            Err(e) => return vec![ValidationError::Parse(e.to_string())],
        };

        // Built from the generic tree so a repeated key keeps its last value
        let structure = match Structure::from_map(&raw) {
            Ok(structure) => structure,
            Err(e) => return vec![ValidationError::Parse(e.to_string())],
        };

        let mut errors = Vec::new();

        debug!("Checking for unexpected keys");
        check_root_keys(&raw, &mut errors);
        check_entry_keys(&raw, "websites", WEBSITE_KEYS, &mut errors);
        check_entry_keys(&raw, "contracts", CONTRACT_KEYS, &mut errors);

        if let Some(websites) = raw.get("websites").and_then(Value::as_array) {
            debug!("Validating {} website(s)", websites.len());
            validate_websites(websites, &mut errors);
        }

        if let Some(contracts) = raw.get("contracts").and_then(Value::as_array) {
            debug!("Validating {} contract(s)", contracts.len());
            validate_contracts(contracts, &mut errors);
        }

        if let Some(categories) = &structure.categories {
            validate_categories(categories, &mut errors);
        }

        if let Some(social) = &structure.social {
            debug!("Validating {} social link(s)", social.len());
            validate_social(social, &mut errors);
        }

        debug!("Running struct-level validation");
        self.structure_validator.validate(&structure, &mut errors);

        if errors.is_empty() {
            info!("✓ Project {:?} is valid", structure.name);
        } else {
            info!("Found {} validation error(s)", errors.len());
        }

        errors
    }
}

/// One-shot convenience wrapper around [`Validator::validate`]
pub fn validate_structure(json: &[u8]) -> Result<Vec<ValidationError>> {
    Ok(Validator::new()?.validate(json))
}
