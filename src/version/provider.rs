//! Release provider trait for looking up the latest release of a repository

#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::version::error::UpdateError;
use crate::version::semver::SemanticVersion;

/// Provider-agnostic view of the latest published release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestRelease {
    pub version: SemanticVersion,
    /// Canonical, human-facing URL of the release
    pub url: String,
    /// True when the registry marks the release as a prerelease or a draft
    pub is_prerelease: bool,
}

/// Trait for looking up the latest release from a remote registry
///
/// Implementations are bound to a single repository at construction time and
/// perform exactly one lookup per call, without caching or retries.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseProvider: Send + Sync {
    /// Fetches and normalizes the latest release
    ///
    /// # Returns
    /// * `Ok(LatestRelease)` - The normalized release
    /// * `Err(UpdateError::ProviderRequest)` - Transport failure or non-2xx response
    /// * `Err(UpdateError::InvalidVersion)` - The release tag is not a semver version
    async fn latest(&self) -> Result<LatestRelease, UpdateError>;
}
