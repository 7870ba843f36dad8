use thiserror::Error;

/// Boxed cause carried by [`UpdateError::ProviderRequest`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Missing access token for the release registry")]
    MissingCredential,

    #[error("Invalid version '{version}': {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("Release request failed: {0}")]
    ProviderRequest(#[source] BoxError),
}

impl UpdateError {
    pub fn invalid_version(version: impl Into<String>, source: semver::Error) -> Self {
        UpdateError::InvalidVersion {
            version: version.into(),
            source,
        }
    }

    pub fn provider_request(cause: impl Into<BoxError>) -> Self {
        UpdateError::ProviderRequest(cause.into())
    }
}

impl From<reqwest::Error> for UpdateError {
    fn from(err: reqwest::Error) -> Self {
        UpdateError::ProviderRequest(Box::new(err))
    }
}
