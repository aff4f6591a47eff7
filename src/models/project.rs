use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Root of an ecosystem project entry.
///
/// String fields tolerate `null` and missing keys (decoded as empty) so that
/// the field checks can report them instead of failing the decode. Sequences
/// decode as `None` when absent, which the struct-level pass reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub websites: Option<Vec<Website>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracts: Option<Vec<Contract>>,

    /// Raw category names; resolved against [`super::Category`] during validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "is_unset")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Website {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub url: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub address: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub label: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
}

/// Social links keyed by platform name, in document order.
///
/// Keys stay raw strings so unknown platforms survive decoding and can be
/// reported. A repeated key keeps its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Social {
    entries: Vec<(String, String)>,
}

impl Social {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, platform: impl Into<String>, url: impl Into<String>) {
        let platform = platform.into();
        let url = url.into();
        match self.entries.iter_mut().find(|(key, _)| *key == platform) {
            Some(entry) => entry.1 = url,
            None => self.entries.push((platform, url)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(platform, url)| (platform.as_str(), url.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Social {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut social = Social::new();
        for (platform, url) in iter {
            social.insert(platform, url);
        }
        social
    }
}

impl Serialize for Social {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (platform, url) in &self.entries {
            map.serialize_entry(platform, url)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Social {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SocialVisitor;

        impl<'de> Visitor<'de> for SocialVisitor {
            type Value = Social;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of platform names to URLs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Social, A::Error> {
                let mut social = Social::new();
                while let Some((platform, url)) = access.next_entry::<String, Option<String>>()? {
                    social.insert(platform, url.unwrap_or_default());
                }
                Ok(social)
            }
        }

        deserializer.deserialize_map(SocialVisitor)
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// An empty email is treated as absent
fn is_unset(email: &Option<String>) -> bool {
    email.as_deref().is_none_or(str::is_empty)
}

impl Structure {
    /// Decode from an already parsed JSON object
    pub fn from_map(raw: &Map<String, Value>) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(raw.clone()))
    }
}
