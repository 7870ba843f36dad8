//! Update decision for the running executable

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::version::error::UpdateError;
use crate::version::provider::{LatestRelease, ReleaseProvider};
use crate::version::semver::SemanticVersion;

/// Result of a single update check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// True iff the latest release is strictly newer and not a prerelease/draft
    pub needs_update: bool,
    pub current: SemanticVersion,
    /// The provider's response, passed through verbatim
    pub latest: LatestRelease,
}

/// Checks whether a newer stable release than the current version exists
pub struct UpdateChecker {
    provider: Arc<dyn ReleaseProvider>,
    current: SemanticVersion,
}

impl UpdateChecker {
    /// Create a new UpdateChecker for the given current version
    ///
    /// The current version must be strict semver; a leading `v` is not
    /// stripped. No request is made until [`UpdateChecker::check`] is called.
    pub fn new(provider: Arc<dyn ReleaseProvider>, current: &str) -> Result<Self, UpdateError> {
        let current = SemanticVersion::parse(current)?;
        Ok(Self { provider, current })
    }

    pub fn current(&self) -> &SemanticVersion {
        &self.current
    }

    /// Look up the latest release and decide whether an update is needed
    ///
    /// Provider errors are returned as-is.
    pub async fn check(&self) -> Result<CheckResult, UpdateError> {
        let latest = self.provider.latest().await?;
        let needs_update = needs_update(&self.current, &latest);

        debug!(
            "Checked {} against latest {} (prerelease: {}): needs_update={}",
            self.current, latest.version, latest.is_prerelease, needs_update
        );

        Ok(CheckResult {
            needs_update,
            current: self.current.clone(),
            latest,
        })
    }
}

/// Prereleases and drafts are reported but never selected.
pub fn needs_update(current: &SemanticVersion, latest: &LatestRelease) -> bool {
    latest.version > *current && !latest.is_prerelease
}
