use tracing::debug;
use url::Url;

use super::error::ValidationError;
use super::fields::raw_authority;
use crate::models::{Platform, Social};

/// Validate social links in document order.
///
/// Each sub-check reports on its own: the host is checked even when the
/// scheme is wrong. An unknown platform or an unparsable URL also fails the
/// host check.
pub fn validate_social(social: &Social, errors: &mut Vec<ValidationError>) {
    for (index, (key, raw_url)) in social.iter().enumerate() {
        let platform = Platform::from_name(key);
        if platform.is_none() {
            errors.push(ValidationError::InvalidPlatform {
                platform: key.to_string(),
            });
        }

        if raw_url.is_empty() {
            errors.push(ValidationError::EmptySocialUrl { index });
        }

        let url = Url::parse(raw_url).ok();
        if url.as_ref().is_none_or(|url| url.scheme() != "https") {
            errors.push(ValidationError::InvalidSocialUrl { index });
        }

        // Compared exactly as written: no case folding, default ports kept
        let host = url.as_ref().and_then(|_| raw_authority(raw_url));
        let allowed = match (platform, host) {
            (Some(platform), Some(host)) => platform.allows_host(host),
            _ => false,
        };
        if !allowed {
            debug!("Host {host:?} is not allowed for social platform {key:?}");
            errors.push(ValidationError::HostNotAllowed {
                index,
                platform: key.to_string(),
            });
        }
    }
}
