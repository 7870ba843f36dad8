use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::Serialize;

use crate::version::error::UpdateError;

/// A parsed `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version.
///
/// Ordering follows semver precedence: build metadata is ignored, so
/// `1.0.0+a` and `1.0.0+b` compare (and test) equal.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SemanticVersion(Version);

impl SemanticVersion {
    /// Parse a strict semver string.
    ///
    /// No `v` prefix is accepted here; see [`SemanticVersion::parse_tag`] for
    /// release tags.
    pub fn parse(version: &str) -> Result<Self, UpdateError> {
        Version::parse(version)
            .map(Self)
            .map_err(|e| UpdateError::invalid_version(version, e))
    }

    /// Parse a release tag, stripping a single leading `v` first.
    ///
    /// Examples:
    /// - "v2.0.1" -> 2.0.1
    /// - "2.0.1" -> 2.0.1
    pub fn parse_tag(tag: &str) -> Result<Self, UpdateError> {
        let trimmed = tag.strip_prefix('v').unwrap_or(tag);
        Version::parse(trimmed)
            .map(Self)
            .map_err(|e| UpdateError::invalid_version(tag, e))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Whether the version carries prerelease identifiers (`1.0.0-rc.1`)
    pub fn is_prerelease(&self) -> bool {
        !self.0.pre.is_empty()
    }

    pub fn as_semver(&self) -> &Version {
        &self.0
    }
}

impl From<Version> for SemanticVersion {
    fn from(version: Version) -> Self {
        Self(version)
    }
}

impl FromStr for SemanticVersion {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_precedence(&other.0)
    }
}
