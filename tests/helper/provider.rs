//! Provider test utilities

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use release_check::{LatestRelease, ReleaseProvider, SemanticVersion, UpdateError};

/// Fake provider returning a canned release or error
pub struct FakeProvider {
    response: Result<LatestRelease, String>,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn with_release(version: &str, url: &str, is_prerelease: bool) -> Self {
        Self {
            response: Ok(LatestRelease {
                version: SemanticVersion::parse(version).unwrap(),
                url: url.to_string(),
                is_prerelease,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_error(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReleaseProvider for FakeProvider {
    async fn latest(&self) -> Result<LatestRelease, UpdateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(release) => Ok(release.clone()),
            Err(message) => Err(UpdateError::provider_request(message.clone())),
        }
    }
}
