use serde_json::{Map, Value};

use super::error::ValidationError;

pub const ROOT_KEYS: &[&str] = &[
    "name",
    "description",
    "websites",
    "contracts",
    "categories",
    "email",
    "social",
];

pub const WEBSITE_KEYS: &[&str] = &["url", "description"];

pub const CONTRACT_KEYS: &[&str] = &["address", "label", "description"];

/// Keys of `object` that are not in `expected`, in document order
pub fn unexpected_keys<'a>(
    object: &'a Map<String, Value>,
    expected: &'a [&str],
) -> impl Iterator<Item = &'a str> {
    object
        .keys()
        .map(String::as_str)
        .filter(move |key| !expected.iter().any(|allowed| allowed == key))
}

pub fn check_root_keys(root: &Map<String, Value>, errors: &mut Vec<ValidationError>) {
    errors.extend(
        unexpected_keys(root, ROOT_KEYS).map(|key| ValidationError::ExtraKey {
            key: key.to_string(),
        }),
    );
}

/// Check every object in the `section` array (`websites`, `contracts`) against `expected`.
/// Non-object entries are skipped.
pub fn check_entry_keys(
    root: &Map<String, Value>,
    section: &str,
    expected: &[&str],
    errors: &mut Vec<ValidationError>,
) {
    let Some(entries) = root.get(section).and_then(Value::as_array) else {
        return;
    };

    for (i, entry) in entries.iter().enumerate() {
        if let Some(object) = entry.as_object() {
            for key in unexpected_keys(object, expected) {
                errors.push(ValidationError::ExtraNestedKey {
                    location: format!("{section}[{i}]"),
                    key: key.to_string(),
                });
            }
        }
    }
}
