use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Broad class of a [`ValidationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Parse,
    Schema,
    RequiredField,
    Format,
    Duplicate,
    Enum,
    HostAllowlist,
}

/// A single problem found in a project document.
///
/// `Display` renders the one-line message printed by the CLI.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    #[diagnostic(
        code(ecosystem::parse),
        help("the document must be a JSON object matching the project layout")
    )]
    Parse(String),

    #[error("extra key: {key}")]
    #[diagnostic(
        code(ecosystem::extra_key),
        help("allowed keys: name, description, websites, contracts, categories, email, social")
    )]
    ExtraKey { key: String },

    #[error("extra key in {location}: {key}")]
    #[diagnostic(code(ecosystem::extra_key))]
    ExtraNestedKey { location: String, key: String },

    #[error("{field} is required")]
    #[diagnostic(code(ecosystem::required))]
    Required { field: String },

    #[error("{field} is not a valid URL")]
    #[diagnostic(
        code(ecosystem::invalid_url),
        help("website URLs must be absolute and use https")
    )]
    InvalidUrl { field: String },

    #[error("{field} is not a valid Ronin address")]
    #[diagnostic(
        code(ecosystem::invalid_address),
        help("addresses are 0x followed by 40 hex digits")
    )]
    InvalidAddress { field: String },

    #[error("{field} is a duplicate")]
    #[diagnostic(code(ecosystem::duplicate))]
    Duplicate { field: String },

    #[error("categories[{index}] is not a valid category")]
    #[diagnostic(
        code(ecosystem::invalid_category),
        help("valid categories: game, nft, finance, dao, tool, other")
    )]
    InvalidCategory { index: usize, value: String },

    #[error("invalid social platform: {platform}")]
    #[diagnostic(
        code(ecosystem::invalid_platform),
        help(
            "valid platforms: facebook, instagram, twitter, x, linkedin, threads, mastodon, telegram, discord"
        )
    )]
    InvalidPlatform { platform: String },

    #[error("social.{index} can't be empty")]
    #[diagnostic(code(ecosystem::required))]
    EmptySocialUrl { index: usize },

    #[error("social.{index} is not a valid URL")]
    #[diagnostic(
        code(ecosystem::invalid_url),
        help("social URLs must be absolute and use https")
    )]
    InvalidSocialUrl { index: usize },

    #[error("social.{index} is not a valid Host for platform {platform}")]
    #[diagnostic(code(ecosystem::host_not_allowed))]
    HostNotAllowed { index: usize, platform: String },

    #[error("validation error: {location}: {detail}")]
    #[diagnostic(code(ecosystem::structure))]
    Structure {
        kind: ErrorKind,
        location: String,
        detail: String,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Parse(_) => ErrorKind::Parse,
            ValidationError::ExtraKey { .. } | ValidationError::ExtraNestedKey { .. } => {
                ErrorKind::Schema
            }
            ValidationError::Required { .. } | ValidationError::EmptySocialUrl { .. } => {
                ErrorKind::RequiredField
            }
            ValidationError::InvalidUrl { .. }
            | ValidationError::InvalidAddress { .. }
            | ValidationError::InvalidSocialUrl { .. } => ErrorKind::Format,
            ValidationError::Duplicate { .. } => ErrorKind::Duplicate,
            ValidationError::InvalidCategory { .. } | ValidationError::InvalidPlatform { .. } => {
                ErrorKind::Enum
            }
            ValidationError::HostNotAllowed { .. } => ErrorKind::HostAllowlist,
            ValidationError::Structure { kind, .. } => *kind,
        }
    }

    pub(crate) fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}
