//! Release source abstraction layer
//!
//! The feed pipeline only ever sees a finished `Vec<RawRelease>`. Where that list
//! comes from is decided here, behind the [ReleaseSource] trait:
//!
//! - [github::GitHubReleaseSource]: the GitHub REST API
//! - [file::FileReleaseSource]: a JSON file (or stdin) in the same shape as the API response
//! - [mock::MockReleaseSource]: an in-memory list for testing
//!
//! ```rust
//! # use appcast_gen::source::{MockReleaseSource, ReleaseSource};
//! # use appcast_gen::domain::RawRelease;
//! let source = MockReleaseSource::new(vec![RawRelease::new("v1.0.0")]);
//! let releases = source.fetch_releases().unwrap();
//! assert_eq!(releases.len(), 1);
//! ```

pub mod file;
pub mod github;
pub mod mock;

pub use file::FileReleaseSource;
pub use github::GitHubReleaseSource;
pub use mock::MockReleaseSource;

use crate::domain::RawRelease;
use crate::error::Result;

/// Anything that can produce the raw release list
///
/// Failures here are fatal to a run; implementations map transport and decoding
/// errors onto [crate::error::AppcastError].
pub trait ReleaseSource {
    /// Fetch every release, in whatever order the source reports them
    fn fetch_releases(&self) -> Result<Vec<RawRelease>>;

    /// Short human-readable origin, used in status output
    fn describe(&self) -> String;
}
