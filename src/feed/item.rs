use chrono::{DateTime, Utc};

use crate::boundary::FeedWarning;
use crate::domain::{OrderedRelease, RawRelease};
use crate::feed::build_number::BuildNumber;
use crate::feed::FeedSettings;

/// `pubDate` format: RFC 1123 HTTP-date in UTC, e.g. "Tue, 05 Mar 2024 10:00:00 GMT"
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// One `<item>` of the appcast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    /// Site link, same as the channel's
    pub link: String,
    /// `sparkle:shortVersionString`
    pub short_version: String,
    /// `sparkle:version`, on the item and on its enclosure
    pub build_number: BuildNumber,
    pub release_notes_link: String,
    pub pub_date: String,
    pub download_url: String,
    /// `sparkle:edSignature`; empty when unsigned
    pub signature: String,
    /// Enclosure length in bytes
    pub length: u64,
}

/// Derives feed items from ordered releases
#[derive(Debug, Clone, Copy)]
pub struct FeedItemBuilder<'a> {
    settings: &'a FeedSettings,
}

impl<'a> FeedItemBuilder<'a> {
    pub fn new(settings: &'a FeedSettings) -> Self {
        FeedItemBuilder { settings }
    }

    pub fn build(&self, ordered: &OrderedRelease, build_number: BuildNumber) -> FeedItem {
        let short_version = ordered.version.to_string();
        let release = &ordered.release;

        FeedItem {
            title: self.settings.item_title.format(&short_version),
            link: self.settings.channel.link.clone(),
            download_url: self.download_url(&ordered.version.original_tag, &short_version),
            short_version,
            build_number,
            release_notes_link: release.html_url.clone(),
            pub_date: format_http_date(&release.published_at.unwrap_or_default()),
            signature: self.settings.signature.clone().unwrap_or_default(),
            length: release.primary_asset_size().unwrap_or(0),
        }
    }

    /// `<base>/<repository>/releases/download/<original tag>/<artifact file>`
    pub fn download_url(&self, original_tag: &str, short_version: &str) -> String {
        format!(
            "{}/{}/releases/download/{}/{}",
            self.settings.download_base.trim_end_matches('/'),
            self.settings.repository,
            original_tag,
            self.settings.artifact_file.format(short_version)
        )
    }
}

pub fn format_http_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(HTTP_DATE_FORMAT).to_string()
}

/// Per-release anomalies that the builder papers over with defaults
pub fn release_warnings(release: &RawRelease) -> Vec<FeedWarning> {
    let mut warnings = Vec::new();
    if release.assets.is_empty() {
        warnings.push(FeedWarning::NoAssets {
            tag: release.tag_name.clone(),
        });
    }
    if release.published_at.is_none() {
        warnings.push(FeedWarning::MissingPublishDate {
            tag: release.tag_name.clone(),
        });
    }
    warnings
}
