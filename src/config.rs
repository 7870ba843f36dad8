use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::version::error::UpdateError;
use crate::version::provider::ReleaseProvider;
use crate::version::providers::{GitHubProvider, GitLabProvider, github, gitlab};

/// Environment variable consulted for a GitHub token when none is configured
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable consulted for a GitLab token when none is configured
pub const GITLAB_TOKEN_ENV: &str = "GITLAB_TOKEN";

/// Release registry flavour
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    GitHub,
    GitLab,
}

impl ProviderKind {
    pub fn token_env_var(self) -> &'static str {
        match self {
            ProviderKind::GitHub => GITHUB_TOKEN_ENV,
            ProviderKind::GitLab => GITLAB_TOKEN_ENV,
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            ProviderKind::GitHub => github::DEFAULT_BASE_URL,
            ProviderKind::GitLab => gitlab::DEFAULT_BASE_URL,
        }
    }
}

/// Release provider configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub owner: String,
    pub repo: String,
    /// Access token; falls back to the kind's token environment variable
    pub token: Option<String>,
    /// API base URL; defaults to the public instance of `kind`
    pub base_url: Option<String>,
    /// Request timeout in milliseconds; no timeout when unset
    pub timeout_ms: Option<u64>,
}

impl ProviderConfig {
    /// Returns the configured token, or the one from the environment.
    pub fn resolve_token(&self) -> Option<String> {
        resolve_token_with_env(
            self.token.clone(),
            std::env::var(self.kind.token_env_var()).ok(),
        )
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.kind.default_base_url())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Build the configured provider.
    ///
    /// Fails with `MissingCredential` when no token is configured or set in
    /// the environment.
    pub fn build(&self) -> Result<Arc<dyn ReleaseProvider>, UpdateError> {
        let token = self.resolve_token().unwrap_or_default();

        let provider: Arc<dyn ReleaseProvider> = match self.kind {
            ProviderKind::GitHub => Arc::new(GitHubProvider::with_config(
                self.base_url(),
                &self.owner,
                &self.repo,
                &token,
                self.timeout(),
            )?),
            ProviderKind::GitLab => Arc::new(GitLabProvider::with_config(
                self.base_url(),
                &self.owner,
                &self.repo,
                &token,
                self.timeout(),
            )?),
        };

        Ok(provider)
    }
}

fn resolve_token_with_env(explicit: Option<String>, env: Option<String>) -> Option<String> {
    explicit
        .filter(|token| !token.is_empty())
        .or_else(|| env.filter(|token| !token.is_empty()))
}
