//! `v`-prefixed semantic version tags.

use std::cmp::Ordering;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use semver::{Prerelease, Version};
use thiserror::Error;

static SHORTHAND_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<major>0|[1-9][0-9]*)(?:\.(?<minor>0|[1-9][0-9]*))?$").unwrap()
});

#[derive(Debug, Error)]
pub enum TagError {
    #[error("tag '{0}' does not start with 'v'")]
    MissingPrefix(String),

    #[error("invalid version tag '{tag}': {source}")]
    SemVer {
        tag: String,
        #[source]
        source: semver::Error,
    },

    #[error("invalid version tag '{0}'")]
    Invalid(String),
}

/// A release tag such as `v1.2.2`.
///
/// The spelling as written is kept for display since it is what ends up in
/// download URLs; comparisons use semantic version precedence only, so
/// `v1.2` equals `v1.2.0` and build metadata is ignored.
#[derive(Debug, Clone)]
pub struct Tag {
    raw: String,
    version: Version,
}

impl Tag {
    /// The tag `v{major}.{minor}.{patch}`.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        let version = Version::new(major, minor, patch);
        Self {
            raw: format!("v{version}"),
            version,
        }
    }

    pub fn parse(s: &str) -> Result<Self, TagError> {
        let rest = s
            .strip_prefix('v')
            .ok_or_else(|| TagError::MissingPrefix(s.to_string()))?;

        // Components must fit in u64, so numerals of 20+ digits that a
        // semver grammar alone would allow are rejected here.
        let version = match SHORTHAND_REGEX.captures(rest) {
            Some(caps) => {
                let major = caps["major"]
                    .parse()
                    .map_err(|_| TagError::Invalid(s.to_string()))?;
                let minor = match caps.name("minor") {
                    Some(m) => m
                        .as_str()
                        .parse()
                        .map_err(|_| TagError::Invalid(s.to_string()))?,
                    None => 0,
                };
                Version::new(major, minor, 0)
            }
            None => Version::parse(rest).map_err(|source| TagError::SemVer {
                tag: s.to_string(),
                source,
            })?,
        };

        Ok(Self {
            raw: s.to_string(),
            version,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The tag as a full `major.minor.patch` version.
    pub fn version(&self) -> &Version {
        &self.version
    }

    fn precedence(&self) -> (u64, u64, u64, &Prerelease) {
        let v = &self.version;
        (v.major, v.minor, v.patch, &v.pre)
    }
}

/// Whether `s` is a valid `v`-prefixed tag.
pub fn is_valid(s: &str) -> bool {
    Tag::parse(s).is_ok()
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::parse(s)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.precedence() == other.precedence()
    }
}

impl Eq for Tag {}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }
}
