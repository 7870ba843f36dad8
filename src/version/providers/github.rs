//! GitHub Releases API provider implementation

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use tracing::debug;

use crate::version::error::UpdateError;
use crate::version::provider::{LatestRelease, ReleaseProvider};
use crate::version::providers::{authenticated_client, trim_base_url};
use crate::version::semver::SemanticVersion;

/// Default base URL for GitHub API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Response from the GitHub "get the latest release" endpoint
#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default)]
    tag_name: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    html_url: String,
    #[serde(default)]
    prerelease: bool,
    #[serde(default)]
    draft: bool,
}

impl Release {
    /// The tag, or the release name when the tag is empty
    fn version_string(&self) -> &str {
        if self.tag_name.is_empty() {
            self.name.as_deref().unwrap_or_default()
        } else {
            &self.tag_name
        }
    }

    fn into_latest(self) -> Result<LatestRelease, UpdateError> {
        let version = SemanticVersion::parse_tag(self.version_string())?;

        Ok(LatestRelease {
            version,
            url: self.html_url,
            is_prerelease: self.prerelease || self.draft,
        })
    }
}

/// Provider for the latest release of a single GitHub repository
pub struct GitHubProvider {
    client: reqwest::Client,
    base_url: String,
    owner: String,
    repo: String,
}

impl GitHubProvider {
    /// Creates a provider against api.github.com
    ///
    /// Fails with `MissingCredential` if `token` is empty.
    pub fn new(owner: &str, repo: &str, token: &str) -> Result<Self, UpdateError> {
        Self::with_config(DEFAULT_BASE_URL, owner, repo, token, None)
    }

    /// Creates a provider against a custom API base URL (e.g. GitHub Enterprise)
    pub fn with_base_url(
        base_url: &str,
        owner: &str,
        repo: &str,
        token: &str,
    ) -> Result<Self, UpdateError> {
        Self::with_config(base_url, owner, repo, token, None)
    }

    /// Creates a provider with a custom base URL and an optional request timeout
    pub fn with_config(
        base_url: &str,
        owner: &str,
        repo: &str,
        token: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, UpdateError> {
        let client = authenticated_client(AUTHORIZATION, token, format!("Bearer {token}"), timeout)?;

        Ok(Self {
            client,
            base_url: trim_base_url(base_url),
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

#[async_trait::async_trait]
impl ReleaseProvider for GitHubProvider {
    async fn latest(&self) -> Result<LatestRelease, UpdateError> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.base_url, self.owner, self.repo
        );
        debug!("Fetching latest GitHub release: {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?;

        let release: Release = response.json().await?;
        let latest = release.into_latest()?;

        debug!(
            "Latest release of {}/{} is {} (prerelease: {})",
            self.owner, self.repo, latest.version, latest.is_prerelease
        );

        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const LATEST_PATH: &str = "/repos/anowner/arepo/releases/latest";

    fn provider(server: &Server) -> GitHubProvider {
        GitHubProvider::with_base_url(&server.url(), "anowner", "arepo", "atoken").unwrap()
    }

    #[test]
    fn new_binds_owner_and_repo() {
        let provider = GitHubProvider::new("anowner", "arepo", "atoken").unwrap();

        assert_eq!(provider.owner(), "anowner");
        assert_eq!(provider.repo(), "arepo");
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn new_fails_when_token_is_empty() {
        let result = GitHubProvider::new("anowner", "arepo", "");
        assert!(matches!(result, Err(UpdateError::MissingCredential)));
    }

    #[tokio::test]
    async fn latest_returns_stable_release() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .match_header("authorization", "Bearer atoken")
            .match_header("accept", "application/vnd.github+json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "tag_name": "99.99.99",
                    "name": "Release 99.99.99",
                    "html_url": "https://host/path/version",
                    "prerelease": false,
                    "draft": false
                }"#,
            )
            .create_async()
            .await;

        let result = provider(&server).latest().await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            result,
            LatestRelease {
                version: SemanticVersion::parse("99.99.99").unwrap(),
                url: "https://host/path/version".to_string(),
                is_prerelease: false,
            }
        );
    }

    #[tokio::test]
    async fn latest_strips_v_prefix_from_tag() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"tag_name": "v2.0.1", "html_url": "https://host/v2.0.1"}"#)
            .create_async()
            .await;

        let result = provider(&server).latest().await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.version, SemanticVersion::parse("2.0.1").unwrap());
        assert!(!result.is_prerelease);
    }

    #[tokio::test]
    async fn latest_falls_back_to_name_when_tag_is_empty() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"tag_name": "", "name": "99.99.99", "html_url": "https://host/path/version"}"#)
            .create_async()
            .await;

        let result = provider(&server).latest().await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.version, SemanticVersion::parse("99.99.99").unwrap());
    }

    #[tokio::test]
    async fn latest_marks_draft_as_prerelease() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"tag_name": "99.99.99", "html_url": "https://host/path/version", "draft": true}"#,
            )
            .create_async()
            .await;

        let result = provider(&server).latest().await.unwrap();

        mock.assert_async().await;
        assert!(result.is_prerelease);
        assert_eq!(result.url, "https://host/path/version");
    }

    #[tokio::test]
    async fn latest_marks_prerelease_flag() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"tag_name": "99.99.99", "html_url": "https://host/path/version", "prerelease": true}"#,
            )
            .create_async()
            .await;

        let result = provider(&server).latest().await.unwrap();

        mock.assert_async().await;
        assert!(result.is_prerelease);
    }

    #[tokio::test]
    async fn latest_fails_for_non_semver_tag() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"tag_name": "WHATISTHISVERSION"}"#)
            .create_async()
            .await;

        let result = provider(&server).latest().await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(UpdateError::InvalidVersion { ref version, .. }) if version == "WHATISTHISVERSION"
        ));
    }

    #[tokio::test]
    async fn latest_fails_for_error_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let result = provider(&server).latest().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(UpdateError::ProviderRequest(_))));
    }

    #[tokio::test]
    async fn latest_fails_for_rate_limit_without_retrying() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(429)
            .with_header("retry-after", "60")
            .expect(1)
            .create_async()
            .await;

        let result = provider(&server).latest().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(UpdateError::ProviderRequest(_))));
    }

    #[tokio::test]
    async fn latest_fails_for_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let result = provider(&server).latest().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(UpdateError::ProviderRequest(_))));
    }

    #[tokio::test]
    async fn latest_sends_token_on_every_request() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .match_header("authorization", Matcher::Exact("Bearer atoken".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"tag_name": "1.0.0"}"#)
            .expect(2)
            .create_async()
            .await;

        let provider = provider(&server);
        provider.latest().await.unwrap();
        provider.latest().await.unwrap();

        mock.assert_async().await;
    }
}
