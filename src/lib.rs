pub mod appcast;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod source;
pub mod ui;

pub use error::{AppcastError, Result};
pub use feed::{build_feed, FeedDocument, FeedOutcome, FeedSettings};
