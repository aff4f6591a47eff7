use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

use super::error::ValidationError;
use super::fields::{has_text, parse_https_url, string_field};

/// Validate the raw `websites` entries in order.
///
/// URLs must be non-empty `https` URLs, unique by exact string match.
pub fn validate_websites(entries: &[Value], errors: &mut Vec<ValidationError>) {
    let mut seen_urls = HashSet::new();

    for (i, entry) in entries.iter().enumerate() {
        let Some(website) = entry.as_object() else {
            continue;
        };

        match string_field(website, "url") {
            Some(url) => {
                if url.is_empty() {
                    errors.push(ValidationError::required(format!("websites[{i}].url")));
                }
                if parse_https_url(url).is_none() {
                    errors.push(ValidationError::InvalidUrl {
                        field: format!("websites[{i}].url"),
                    });
                }
                if !seen_urls.insert(url) {
                    debug!("Duplicate website URL {url:?} at index {i}");
                    errors.push(ValidationError::Duplicate {
                        field: format!("websites[{i}].url"),
                    });
                }
            }
            None => errors.push(ValidationError::required(format!("websites[{i}].url"))),
        }

        if !has_text(website, "description") {
            errors.push(ValidationError::required(format!(
                "websites[{i}].description"
            )));
        }
    }
}
