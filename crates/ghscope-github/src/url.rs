//! URL construction helpers for the GitHub API.

use url::Url;

use crate::error::{GatewayError, GatewayResult};

/// Parse and normalize the configured API base URL.
///
/// A trailing slash is added so relative endpoint paths resolve beneath the
/// base instead of replacing its last segment.
pub fn parse_base_url(raw: &str) -> GatewayResult<Url> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&normalized).map_err(|source| GatewayError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(GatewayError::UnsupportedBaseUrl {
            url: raw.to_string(),
        });
    }

    Ok(url)
}

/// Resolve an endpoint path (with optional query string) against the base.
pub fn endpoint_url(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    base.join(path.trim_start_matches('/'))
}
