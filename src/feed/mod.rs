//! Feed synthesis: releases in, appcast document model out
//!
//! The whole pipeline is a pure function of the release list and [FeedSettings]:
//!
//! 1. [order::order_releases] parses every tag and sorts newest-first
//! 2. [BuildNumber::for_rank] derives each item's build number from its rank
//! 3. [FeedItemBuilder] derives titles, URLs, dates and enclosure data
//! 4. [FeedDocument::assemble] wraps the items in channel metadata
//!
//! Anomalies are returned as [FeedWarning]s next to the document; nothing here fails.

pub mod build_number;
pub mod document;
pub mod item;
pub mod order;

pub use build_number::BuildNumber;
pub use document::{ChannelMetadata, FeedDocument};
pub use item::{FeedItem, FeedItemBuilder};
pub use order::{order_releases, OrderedReleases};

use crate::boundary::FeedWarning;
use crate::domain::{RawRelease, VersionParser, VersionTemplate};

/// Everything the pipeline needs besides the releases themselves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    /// `owner/name` of the repository hosting the downloads
    pub repository: String,
    pub download_base: String,
    /// Opaque EdDSA signature copied to every enclosure
    pub signature: Option<String>,
    pub item_title: VersionTemplate,
    pub artifact_file: VersionTemplate,
    pub channel: ChannelMetadata,
}

/// Result of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct FeedOutcome {
    pub document: FeedDocument,
    pub warnings: Vec<FeedWarning>,
    /// Number of releases left out because their tag did not parse
    pub skipped: usize,
}

/// Build the appcast document for a list of releases
pub fn build_feed(
    parser: &VersionParser,
    releases: Vec<RawRelease>,
    settings: &FeedSettings,
) -> FeedOutcome {
    let total_input = releases.len();
    let ordered = order_releases(parser, releases);
    let skipped = ordered.skipped.len();
    let mut warnings = ordered.skipped;

    if settings.signature.as_deref().unwrap_or("").is_empty() {
        warnings.push(FeedWarning::MissingSignature);
    }

    let total = ordered.releases.len();
    if total == 0 && total_input > 0 {
        warnings.push(FeedWarning::NoPublishableReleases { total: total_input });
    }

    let builder = FeedItemBuilder::new(settings);
    let mut items = Vec::with_capacity(total);
    for release in &ordered.releases {
        let Some(build_number) = BuildNumber::for_rank(release.rank, total) else {
            continue;
        };
        warnings.extend(item::release_warnings(&release.release));
        items.push(builder.build(release, build_number));
    }

    FeedOutcome {
        document: FeedDocument::assemble(settings.channel.clone(), items),
        warnings,
        skipped,
    }
}
