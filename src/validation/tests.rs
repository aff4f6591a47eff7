use super::{ErrorKind, ValidationError, Validator, validate_structure};
use serde_json::{Value, json};

const AXS: &str = "0x97a9107c1793bc407d6f527b77e7fff4d812bece";
const SLP: &str = "0xa8754b9fa15fc18bb59458815510e40a12cd2014";

fn valid_document() -> Value {
    json!({
        "name": "Axie Infinity",
        "description": "A universe of creatures called Axies",
        "websites": [
            {"url": "https://axieinfinity.com", "description": "Home"},
            {"url": "https://app.axieinfinity.com", "description": "Marketplace"}
        ],
        "contracts": [
            {"address": AXS, "label": "AXS", "description": "Governance token"},
            {"address": SLP, "label": "SLP", "description": "Smooth Love Potion"}
        ],
        "categories": ["game", "nft"],
        "email": "hello@axieinfinity.com",
        "social": {
            "twitter": "https://x.com/AxieInfinity",
            "discord": "https://discord.gg/axie",
            "telegram": "https://t.me/axieinfinity"
        }
    })
}

fn validate(document: &Value) -> Vec<ValidationError> {
    let validator = Validator::new().unwrap();
    validator.validate(&serde_json::to_vec(document).unwrap())
}

fn messages(errors: &[ValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

#[test]
fn test_validator_creation() {
    let validator = Validator::new();
    assert!(validator.is_ok());
}

#[test]
fn test_valid_document() {
    let errors = validate(&valid_document());
    assert!(errors.is_empty(), "unexpected errors: {:?}", messages(&errors));
}

#[test]
fn test_minimal_document() {
    let document = json!({
        "name": "Tool",
        "description": "A tool",
        "websites": [],
        "contracts": [],
        "categories": []
    });
    assert!(validate(&document).is_empty());
}

#[test]
fn test_unknown_top_level_key() {
    let mut document = valid_document();
    document["homepage"] = json!("https://axieinfinity.com");

    let errors = validate(&document);
    assert_eq!(messages(&errors), vec!["extra key: homepage"]);
    assert_eq!(errors[0].kind(), ErrorKind::Schema);
}

#[test]
fn test_unknown_nested_keys() {
    let mut document = valid_document();
    document["websites"][1]["lang"] = json!("en");
    document["contracts"][0]["chain"] = json!("ronin");

    let errors = validate(&document);
    assert_eq!(
        messages(&errors),
        vec![
            "extra key in websites[1]: lang",
            "extra key in contracts[0]: chain"
        ]
    );
}

#[test]
fn test_duplicate_website_url() {
    let mut document = valid_document();
    document["websites"][1]["url"] = json!("https://axieinfinity.com");

    let errors = validate(&document);
    assert_eq!(messages(&errors), vec!["websites[1].url is a duplicate"]);
    assert_eq!(errors[0].kind(), ErrorKind::Duplicate);
}

#[test]
fn test_invalid_contract_address() {
    for address in ["0xZZZ", "97a9107c1793bc407d6f527b77e7fff4d812bece"] {
        let mut document = valid_document();
        document["contracts"][1]["address"] = json!(address);

        let errors = validate(&document);
        assert_eq!(
            messages(&errors),
            vec!["contracts[1].address is not a valid Ronin address"]
        );
        assert_eq!(errors[0].kind(), ErrorKind::Format);
    }
}

#[test]
fn test_social_host_allow_list() {
    let mut document = valid_document();
    document["social"] = json!({"twitter": "https://x.com/foo"});
    assert!(validate(&document).is_empty());

    document["social"] = json!({"twitter": "https://evil.com/foo"});
    let errors = validate(&document);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::HostAllowlist);
}

#[test]
fn test_unknown_category() {
    let mut document = valid_document();
    document["categories"] = json!(["game", "bogus"]);

    let errors = validate(&document);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::Enum);
    assert!(matches!(
        &errors[0],
        ValidationError::InvalidCategory { index: 1, value } if value == "bogus"
    ));
}

#[test]
fn test_malformed_json_is_single_error() {
    let validator = Validator::new().unwrap();

    let inputs: [&[u8]; 4] = [b"{\"name\":", b"", b"not json", b"[1, 2]"];
    for input in inputs {
        let errors = validator.validate(input);
        assert_eq!(errors.len(), 1, "input {input:?}");
        assert_eq!(errors[0].kind(), ErrorKind::Parse);
    }
}

#[test]
fn test_repeated_keys_keep_last_value() {
    let validator = Validator::new().unwrap();

    let errors = validator.validate(
        br#"{"name": "A", "name": "B", "description": "D", "websites": [], "contracts": [], "categories": []}"#,
    );
    assert!(errors.is_empty(), "{:?}", messages(&errors));

    let errors = validator.validate(
        br#"{"name": "A", "description": "D",
            "websites": [{"url": "http://a.dev", "url": "https://a.dev", "description": "Home"}],
            "contracts": [], "categories": ["bogus"]}"#,
    );
    assert_eq!(
        messages(&errors),
        vec!["categories[0] is not a valid category"]
    );
}

#[test]
fn test_wrong_root_shape_is_parse_error() {
    let errors = validate(&json!({"name": "n", "websites": {"url": "https://a.dev"}}));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::Parse);
}

#[test]
fn test_missing_required_fields() {
    let errors = validate(&json!({}));

    assert_eq!(errors.len(), 5, "{:?}", messages(&errors));
    assert!(
        errors
            .iter()
            .all(|e| e.kind() == ErrorKind::RequiredField)
    );
    for field in ["name", "description", "websites", "contracts", "categories"] {
        assert!(
            errors.iter().any(|e| e.to_string().contains(field)),
            "no error mentions {field}"
        );
    }
}

#[test]
fn test_invalid_email() {
    let mut document = valid_document();
    document["email"] = json!("axie at example dot com");

    let errors = validate(&document);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::Format);
    assert!(errors[0].to_string().starts_with("validation error: /email: "));
}

#[test]
fn test_errors_accumulate_in_order() {
    let document = json!({
        "name": "N",
        "description": "D",
        "websites": [
            {"url": "http://a.dev", "description": "a", "lang": "en"},
            {"url": "http://a.dev", "description": ""}
        ],
        "contracts": [{"address": "0xZZZ", "label": "", "description": "c"}],
        "categories": ["game", "bogus"],
        "social": {"x": "https://evil.com/x"},
        "extra": true
    });

    let rendered = messages(&validate(&document)).join("\n");
    insta::assert_snapshot!(rendered, @r"
    extra key: extra
    extra key in websites[0]: lang
    websites[0].url is not a valid URL
    websites[1].url is not a valid URL
    websites[1].url is a duplicate
    websites[1].description is required
    contracts[0].address is not a valid Ronin address
    contracts[0].label is required
    categories[1] is not a valid category
    social.0 is not a valid Host for platform x
    ");
}

#[test]
fn test_social_errors_follow_document_order() {
    let mut document = valid_document();
    document["social"] = json!({
        "myspace": "https://myspace.com/axie",
        "facebook": "https://facebook.com/axie",
        "instagram": ""
    });

    let errors = validate(&document);
    assert_eq!(
        messages(&errors),
        vec![
            "invalid social platform: myspace",
            "social.0 is not a valid Host for platform myspace",
            "social.2 can't be empty",
            "social.2 is not a valid URL",
            "social.2 is not a valid Host for platform instagram"
        ]
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let document = json!({
        "name": "",
        "websites": [{"url": "ftp://a.dev"}],
        "contracts": [{"address": ""}],
        "categories": ["x", "y"],
        "social": {"b": "", "a": "https://t.co/z"},
        "zzz": 1,
        "aaa": 2
    });
    let bytes = serde_json::to_vec(&document).unwrap();
    let validator = Validator::new().unwrap();

    let first = validator.validate(&bytes);
    let second = validator.validate(&bytes);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_validate_structure_wrapper() {
    let bytes = serde_json::to_vec(&valid_document()).unwrap();
    let errors = validate_structure(&bytes).unwrap();
    assert!(errors.is_empty());
}
