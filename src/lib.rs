//! Checks whether the running executable is behind the latest published
//! release of its project.
//!
//! ```no_run
//! use std::sync::Arc;
//! use release_check::{GitHubProvider, UpdateChecker};
//!
//! # async fn run() -> Result<(), release_check::UpdateError> {
//! let provider = GitHubProvider::new("owner", "repo", "token")?;
//! let checker = UpdateChecker::new(Arc::new(provider), env!("CARGO_PKG_VERSION"))?;
//!
//! let result = checker.check().await?;
//! if result.needs_update {
//!     println!("{} is available at {}", result.latest.version, result.latest.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod version;

pub use config::{ProviderConfig, ProviderKind};
pub use version::checker::{CheckResult, UpdateChecker};
pub use version::error::UpdateError;
pub use version::provider::{LatestRelease, ReleaseProvider};
pub use version::providers::{GitHubProvider, GitLabProvider};
pub use version::semver::SemanticVersion;
