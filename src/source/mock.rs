use crate::domain::RawRelease;
use crate::error::{AppcastError, Result};
use crate::source::ReleaseSource;

/// Mock source for testing without network or files
pub struct MockReleaseSource {
    releases: Vec<RawRelease>,
    failure: Option<String>,
}

impl MockReleaseSource {
    pub fn new(releases: Vec<RawRelease>) -> Self {
        MockReleaseSource {
            releases,
            failure: None,
        }
    }

    /// A source whose fetch always fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        MockReleaseSource {
            releases: Vec::new(),
            failure: Some(message.into()),
        }
    }

    pub fn add_release(&mut self, release: RawRelease) {
        self.releases.push(release);
    }
}

impl Default for MockReleaseSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ReleaseSource for MockReleaseSource {
    fn fetch_releases(&self) -> Result<Vec<RawRelease>> {
        match &self.failure {
            Some(message) => Err(AppcastError::source(message.clone())),
            None => Ok(self.releases.clone()),
        }
    }

    fn describe(&self) -> String {
        "in-memory releases".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_returns_releases() {
        let mut source = MockReleaseSource::default();
        source.add_release(RawRelease::new("v1.0.0"));
        source.add_release(RawRelease::new("v1.1.0"));

        let releases = source.fetch_releases().unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[1].tag_name, "v1.1.0");
    }

    #[test]
    fn test_mock_failure() {
        let source = MockReleaseSource::failing("rate limited");
        let err = source.fetch_releases().unwrap_err();
        assert_eq!(err.to_string(), "Release source error: rate limited");
    }
}
