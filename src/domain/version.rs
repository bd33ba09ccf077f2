use crate::domain::prerelease::PreRelease;
use crate::error::{AppcastError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

/// Tag grammar: optional `<prefix>-`, optional `v`, `major.minor.patch`, optional
/// `-<id>[.<id>...]`. Searched anywhere in the tag, not anchored.
const TAG_VERSION_PATTERN: &str = r"(?:[0-9A-Za-z_/]+-)?v?(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)(?:-(?P<pre>[0-9A-Za-z]+(?:\.[0-9A-Za-z]+)*))?";

/// Version extracted from a release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: PreRelease,
    /// The tag exactly as published, used when building download URLs
    pub original_tag: String,
}

impl ParsedVersion {
    /// Create a version for a tag; the tag text is kept verbatim
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: PreRelease,
        original_tag: impl Into<String>,
    ) -> Self {
        ParsedVersion {
            major,
            minor,
            patch,
            prerelease,
            original_tag: original_tag.into(),
        }
    }

    /// Parse a version from a tag string (e.g., "desktop-v1.2.0-beta.1")
    ///
    /// Returns `None` when the tag has no `major.minor.patch` run.
    pub fn from_tag(tag: &str) -> Option<Self> {
        VersionParser::new().ok()?.parse(tag)
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_stable()
    }

    /// Ascending precedence: `Greater` means `self` is the newer release
    pub fn precedence(&self, other: &ParsedVersion) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| self.prerelease.precedence(&other.prerelease))
    }
}

/// Display string used for `sparkle:shortVersionString`: `major.minor.patch[-prerelease]`
impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_stable() {
            write!(f, "-{}", self.prerelease)?;
        }
        Ok(())
    }
}

/// Newest-first comparator for sorting releases
///
/// Equal-ranked versions return `Ordering::Equal`; callers rely on a stable sort to
/// keep their input order.
pub fn newest_first(a: &ParsedVersion, b: &ParsedVersion) -> Ordering {
    b.precedence(a)
}

/// Extracts versions from free-form tag strings
#[derive(Debug, Clone)]
pub struct VersionParser {
    pattern: Regex,
}

impl VersionParser {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(TAG_VERSION_PATTERN)
            .map_err(|e| AppcastError::template(format!("Invalid tag pattern: {}", e)))?;
        Ok(VersionParser { pattern })
    }

    /// Match a tag against the version grammar
    ///
    /// A component too large for `u64` makes the whole tag unparsable.
    pub fn parse(&self, tag: &str) -> Option<ParsedVersion> {
        let captures = self.pattern.captures(tag)?;

        let major = captures.name("major")?.as_str().parse::<u64>().ok()?;
        let minor = captures.name("minor")?.as_str().parse::<u64>().ok()?;
        let patch = captures.name("patch")?.as_str().parse::<u64>().ok()?;
        let prerelease = captures
            .name("pre")
            .map(|m| PreRelease::parse(m.as_str()))
            .unwrap_or_default();

        Some(ParsedVersion::new(major, minor, patch, prerelease, tag))
    }
}
