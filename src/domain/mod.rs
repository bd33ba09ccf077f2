//! Domain logic - pure release and version rules independent of I/O

pub mod prerelease;
pub mod release;
pub mod template;
pub mod version;

pub use prerelease::PreRelease;
pub use release::{OrderedRelease, RawRelease, ReleaseAsset};
pub use template::VersionTemplate;
pub use version::{newest_first, ParsedVersion, VersionParser};
