use serde_json::{Map, Value};
use url::Url;

/// Value of `key` if it is present and a JSON string
pub fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// True if `key` holds a non-empty string
pub fn has_text(object: &Map<String, Value>, key: &str) -> bool {
    string_field(object, key).is_some_and(|s| !s.is_empty())
}

/// Parse `raw` as an absolute `https` URL
pub fn parse_https_url(raw: &str) -> Option<Url> {
    Url::parse(raw).ok().filter(|url| url.scheme() == "https")
}

/// Host and port exactly as written in `raw`, without userinfo.
///
/// No case folding and no default-port stripping.
pub fn raw_authority(raw: &str) -> Option<&str> {
    let (_, rest) = raw.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    (!host.is_empty()).then_some(host)
}
