//! Release lookup and update decision
//!
//! This module answers one question: is there a newer, stable release of the
//! running executable, and where can it be found?
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Checker   │────▶│  Provider   │────▶│  Registry   │
//! │  (decide)   │     │ (normalize) │     │ (GitHub...) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Semver    │
//! │ (ordering)  │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: `UpdateChecker` and the update decision rule
//! - [`provider`]: `ReleaseProvider` trait and `LatestRelease`
//! - [`providers`]: Concrete providers (GitHub, GitLab)
//! - [`semver`]: `SemanticVersion` parsing and precedence
//! - [`error`]: Error type shared by all of the above

pub mod checker;
pub mod error;
pub mod provider;
pub mod providers;
pub mod semver;
