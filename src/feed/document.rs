use crate::feed::item::FeedItem;

/// Fixed `<channel>` metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMetadata {
    pub title: String,
    pub description: String,
    pub language: String,
    pub link: String,
}

/// The whole appcast, items newest-first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    pub channel: ChannelMetadata,
    pub items: Vec<FeedItem>,
}

impl FeedDocument {
    /// Wrap items in channel metadata. Item order is kept as given.
    pub fn assemble(channel: ChannelMetadata, items: Vec<FeedItem>) -> Self {
        FeedDocument { channel, items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
