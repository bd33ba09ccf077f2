use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::version::ParsedVersion;

/// One downloadable file attached to a release
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReleaseAsset {
    #[serde(default)]
    pub name: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
}

/// A release as reported by the hosting service
///
/// Field names follow the GitHub REST `releases` payload so the JSON can be
/// deserialized as-is; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawRelease {
    /// Origin identifier assigned by the hosting service
    #[serde(default)]
    pub id: u64,
    pub tag_name: String,
    /// `None` for drafts that were never published
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Release notes page
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl RawRelease {
    pub fn new(tag_name: impl Into<String>) -> Self {
        RawRelease {
            id: 0,
            tag_name: tag_name.into(),
            published_at: None,
            html_url: String::new(),
            assets: Vec::new(),
        }
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn with_notes_url(mut self, html_url: impl Into<String>) -> Self {
        self.html_url = html_url.into();
        self
    }

    pub fn with_asset(mut self, name: impl Into<String>, size: u64) -> Self {
        self.assets.push(ReleaseAsset {
            name: name.into(),
            size,
        });
        self
    }

    /// Size of the first asset, the only one the feed describes
    pub fn primary_asset_size(&self) -> Option<u64> {
        self.assets.first().map(|asset| asset.size)
    }
}

/// A release with its parsed version and its position in newest-first order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedRelease {
    pub release: RawRelease,
    pub version: ParsedVersion,
    /// 0 is the newest release
    pub rank: usize,
}
