//! Release provider implementations for concrete registries

pub mod github;
pub mod gitlab;

pub use github::GitHubProvider;
pub use gitlab::GitLabProvider;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::version::error::UpdateError;

/// User-Agent sent with every release lookup
const USER_AGENT: &str = concat!("release-check/", env!("CARGO_PKG_VERSION"));

/// Build an HTTP client that sends `auth_value` under `auth_header` on every request.
///
/// Fails with `MissingCredential` when the credential is empty. The header is
/// marked sensitive so it never shows up in debug output.
fn authenticated_client(
    auth_header: HeaderName,
    token: &str,
    auth_value: String,
    timeout: Option<Duration>,
) -> Result<reqwest::Client, UpdateError> {
    if token.is_empty() {
        return Err(UpdateError::MissingCredential);
    }

    let mut value = HeaderValue::from_str(&auth_value).map_err(UpdateError::provider_request)?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(auth_header, value);

    let mut builder = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

/// Strip a trailing slash so paths can be appended with `format!`
fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
