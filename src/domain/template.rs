use crate::error::{AppcastError, Result};

const PLACEHOLDER: &str = "{version}";

/// Text pattern with a `{version}` placeholder (e.g., "Version {version}",
/// "klarity-{version}-macos.zip")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTemplate {
    pub pattern: String,
}

impl VersionTemplate {
    pub fn new(pattern: impl Into<String>) -> Self {
        VersionTemplate {
            pattern: pattern.into(),
        }
    }

    /// Substitute the version display string
    /// Example: pattern="Version {version}", version="1.2.3" -> "Version 1.2.3"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace(PLACEHOLDER, version)
    }

    /// A template must contain exactly one `{version}` placeholder
    pub fn validate(&self) -> Result<()> {
        match self.pattern.matches(PLACEHOLDER).count() {
            1 => Ok(()),
            0 => Err(AppcastError::template(format!(
                "Pattern '{}' must contain a {{version}} placeholder",
                self.pattern
            ))),
            _ => Err(AppcastError::template(format!(
                "Pattern '{}' must contain exactly one {{version}} placeholder",
                self.pattern
            ))),
        }
    }
}
