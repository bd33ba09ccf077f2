//! Pre-release suffix handling
//!
//! A pre-release is the dot-separated run of identifiers after the `-` in a version
//! such as `1.2.0-beta.10`. Ordering between two pre-releases of the same numeric
//! version is purely numeric: every identifier is read as an integer and the shorter
//! sequence is padded with zeros.

use std::cmp::Ordering;
use std::fmt;

/// Pre-release identifiers of a version, in tag order
///
/// An empty sequence means the version is a stable release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreRelease {
    tokens: Vec<String>,
}

impl PreRelease {
    /// A stable (empty) pre-release
    pub fn stable() -> Self {
        PreRelease { tokens: Vec::new() }
    }

    /// Split a raw suffix like `beta.2` into identifiers
    ///
    /// Empty identifiers (from `beta..2` or a trailing dot) are dropped.
    pub fn parse(s: &str) -> Self {
        let tokens = s
            .split('.')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        PreRelease { tokens }
    }

    pub fn is_stable(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Compare two pre-release sequences, ascending (older first)
    ///
    /// Only meaningful when both sides belong to the same `major.minor.patch`.
    /// Stable beats any pre-release. Two pre-releases compare identifier by
    /// identifier as integers, with a missing identifier counting as 0.
    pub fn precedence(&self, other: &PreRelease) -> Ordering {
        match (self.is_stable(), other.is_stable()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let len = self.tokens.len().max(other.tokens.len());
                for i in 0..len {
                    let ours = self.tokens.get(i).map_or(0, |t| token_value(t));
                    let theirs = other.tokens.get(i).map_or(0, |t| token_value(t));
                    match ours.cmp(&theirs) {
                        Ordering::Equal => continue,
                        decided => return decided,
                    }
                }
                Ordering::Equal
            }
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join("."))
    }
}

/// Integer value of one identifier: its leading ASCII digits, or 0 when it has none.
///
/// `"10"` -> 10, `"10rc"` -> 10, `"beta"` -> 0. Saturates at `u64::MAX`.
pub fn token_value(token: &str) -> u64 {
    token
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        let pr = PreRelease::parse("beta.10");
        assert_eq!(pr.tokens(), &["beta".to_string(), "10".to_string()]);
        assert!(!pr.is_stable());
    }

    #[test]
    fn test_parse_empty_is_stable() {
        assert!(PreRelease::parse("").is_stable());
        assert_eq!(PreRelease::parse(""), PreRelease::stable());
    }

    #[test]
    fn test_parse_drops_empty_tokens() {
        let pr = PreRelease::parse("beta..2.");
        assert_eq!(pr.to_string(), "beta.2");
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(PreRelease::parse("dev.1").to_string(), "dev.1");
        assert_eq!(PreRelease::parse("rc").to_string(), "rc");
    }

    #[test]
    fn test_token_value() {
        assert_eq!(token_value("10"), 10);
        assert_eq!(token_value("007"), 7);
        assert_eq!(token_value("10abc"), 10);
        assert_eq!(token_value("beta"), 0);
        assert_eq!(token_value(""), 0);
    }

    #[test]
    fn test_token_value_saturates() {
        assert_eq!(token_value("99999999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_stable_beats_prerelease() {
        let stable = PreRelease::stable();
        let beta = PreRelease::parse("beta.1");
        assert_eq!(stable.precedence(&beta), Ordering::Greater);
        assert_eq!(beta.precedence(&stable), Ordering::Less);
        assert_eq!(stable.precedence(&PreRelease::stable()), Ordering::Equal);
    }

    #[test]
    fn test_numeric_token_comparison() {
        let beta2 = PreRelease::parse("beta.2");
        let beta10 = PreRelease::parse("beta.10");
        assert_eq!(beta10.precedence(&beta2), Ordering::Greater);
        assert_eq!(beta2.precedence(&beta10), Ordering::Less);
    }

    #[test]
    fn test_missing_token_counts_as_zero() {
        let short = PreRelease::parse("1");
        let padded = PreRelease::parse("1.0");
        let longer = PreRelease::parse("1.1");
        assert_eq!(short.precedence(&padded), Ordering::Equal);
        assert_eq!(longer.precedence(&short), Ordering::Greater);
    }

    #[test]
    fn test_non_numeric_identifiers_tie() {
        let alpha = PreRelease::parse("alpha.1");
        let beta = PreRelease::parse("beta.1");
        assert_eq!(alpha.precedence(&beta), Ordering::Equal);
    }
}
