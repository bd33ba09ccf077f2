use std::fmt;

/// Non-fatal issues found while turning releases into feed items.
/// Each one affects a single release (or the signature) and never aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedWarning {
    /// Tag has no `major.minor.patch`; the release is left out of the feed
    UnparsableTag { tag: String, reason: String },
    /// Release has no assets; its enclosure length is 0
    NoAssets { tag: String },
    /// Release was never published; its date falls back to the Unix epoch
    MissingPublishDate { tag: String },
    /// No signature configured; enclosures carry an empty signature
    MissingSignature,
    /// Nothing survived parsing, so the feed has no items
    NoPublishableReleases { total: usize },
}

impl fmt::Display for FeedWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedWarning::UnparsableTag { tag, reason } => {
                write!(f, "Skipping release '{}': {}", tag, reason)
            }
            FeedWarning::NoAssets { tag } => {
                write!(f, "Release '{}' has no assets, enclosure length set to 0", tag)
            }
            FeedWarning::MissingPublishDate { tag } => {
                write!(
                    f,
                    "Release '{}' has no publish date, using the Unix epoch",
                    tag
                )
            }
            FeedWarning::MissingSignature => {
                write!(f, "No EdDSA signature configured, enclosures will be unsigned")
            }
            FeedWarning::NoPublishableReleases { total } => {
                write!(f, "None of the {} releases has a usable version tag", total)
            }
        }
    }
}
