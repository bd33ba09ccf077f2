use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::domain::RawRelease;
use crate::error::{AppcastError, Result};
use crate::source::ReleaseSource;

/// Reads a GitHub-shaped releases JSON array from a file, or stdin for `-`
#[derive(Debug, Clone)]
pub struct FileReleaseSource {
    path: PathBuf,
}

impl FileReleaseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileReleaseSource { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn read_content(&self) -> Result<String> {
        if self.is_stdin() {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            return Ok(content);
        }

        fs::read_to_string(&self.path).map_err(|e| {
            AppcastError::source(format!("Cannot read {}: {}", self.path.display(), e))
        })
    }
}

impl ReleaseSource for FileReleaseSource {
    fn fetch_releases(&self) -> Result<Vec<RawRelease>> {
        let content = self.read_content()?;
        parse_releases(&content)
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "standard input".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}

/// Decode a releases JSON array
pub fn parse_releases(content: &str) -> Result<Vec<RawRelease>> {
    Ok(serde_json::from_str(content)?)
}
