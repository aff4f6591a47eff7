use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

use super::error::ValidationError;
use super::fields::{has_text, string_field};

const ADDRESS_LENGTH: usize = 20;

/// True for `0x` followed by exactly 40 hex digits (either case)
pub fn is_hex_address(address: &str) -> bool {
    let Some(digits) = address.strip_prefix("0x") else {
        return false;
    };
    let mut bytes = [0u8; ADDRESS_LENGTH];
    hex::decode_to_slice(digits, &mut bytes).is_ok()
}

/// Validate the raw `contracts` entries in order.
pub fn validate_contracts(entries: &[Value], errors: &mut Vec<ValidationError>) {
    let mut seen_addresses = HashSet::new();

    for (i, entry) in entries.iter().enumerate() {
        let Some(contract) = entry.as_object() else {
            continue;
        };

        match string_field(contract, "address") {
            Some(address) => {
                if address.is_empty() {
                    errors.push(ValidationError::required(format!(
                        "contracts[{i}].address"
                    )));
                }
                if !is_hex_address(address) {
                    errors.push(ValidationError::InvalidAddress {
                        field: format!("contracts[{i}].address"),
                    });
                }
                if !seen_addresses.insert(address) {
                    debug!("Duplicate contract address {address:?} at index {i}");
                    errors.push(ValidationError::Duplicate {
                        field: format!("contracts[{i}].address"),
                    });
                }
            }
            None => errors.push(ValidationError::required(format!(
                "contracts[{i}].address"
            ))),
        }

        if !has_text(contract, "label") {
            errors.push(ValidationError::required(format!("contracts[{i}].label")));
        }

        if !has_text(contract, "description") {
            errors.push(ValidationError::required(format!(
                "contracts[{i}].description"
            )));
        }
    }
}
