//! GitLab Releases API provider implementation

use std::time::Duration;

use reqwest::header::HeaderName;
use serde::Deserialize;
use tracing::debug;

use crate::version::error::UpdateError;
use crate::version::provider::{LatestRelease, ReleaseProvider};
use crate::version::providers::{authenticated_client, trim_base_url};
use crate::version::semver::SemanticVersion;

/// Default base URL for GitLab API
pub const DEFAULT_BASE_URL: &str = "https://gitlab.com/api/v4";

#[derive(Debug, Default, Deserialize)]
struct Links {
    #[serde(default, rename = "self")]
    self_url: String,
}

/// Response from the GitLab "latest release" permalink
#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default)]
    tag_name: String,
    #[serde(default)]
    upcoming_release: bool,
    #[serde(default, rename = "_links")]
    links: Links,
}

impl Release {
    /// GitLab has no prerelease flag, so a semver prerelease tag counts as one.
    fn into_latest(self) -> Result<LatestRelease, UpdateError> {
        let version = SemanticVersion::parse_tag(&self.tag_name)?;
        let is_prerelease = self.upcoming_release || version.is_prerelease();

        Ok(LatestRelease {
            version,
            url: self.links.self_url,
            is_prerelease,
        })
    }
}

/// Provider for the latest release of a single GitLab project
pub struct GitLabProvider {
    client: reqwest::Client,
    base_url: String,
    owner: String,
    repo: String,
}

impl GitLabProvider {
    /// Creates a provider against gitlab.com
    ///
    /// `owner` may be a nested group path such as `group/subgroup`.
    pub fn new(owner: &str, repo: &str, token: &str) -> Result<Self, UpdateError> {
        Self::with_config(DEFAULT_BASE_URL, owner, repo, token, None)
    }

    /// Creates a provider against a self-hosted instance
    pub fn with_base_url(
        base_url: &str,
        owner: &str,
        repo: &str,
        token: &str,
    ) -> Result<Self, UpdateError> {
        Self::with_config(base_url, owner, repo, token, None)
    }

    pub fn with_config(
        base_url: &str,
        owner: &str,
        repo: &str,
        token: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, UpdateError> {
        let client = authenticated_client(
            HeaderName::from_static("private-token"),
            token,
            token.to_string(),
            timeout,
        )?;

        Ok(Self {
            client,
            base_url: trim_base_url(base_url),
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Encode the full project path as a single URL segment: group/project -> group%2Fproject
    fn project_id(&self) -> String {
        format!("{}/{}", self.owner, self.repo).replace('/', "%2F")
    }
}

#[async_trait::async_trait]
impl ReleaseProvider for GitLabProvider {
    async fn latest(&self) -> Result<LatestRelease, UpdateError> {
        let url = format!(
            "{}/projects/{}/releases/permalink/latest",
            self.base_url,
            self.project_id()
        );
        debug!("Fetching latest GitLab release: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let release: Release = response.json().await?;
        release.into_latest()
    }
}
