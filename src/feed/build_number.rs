use std::fmt;

/// Width of the zero-padded `sparkle:version` string
pub const BUILD_NUMBER_WIDTH: usize = 5;

/// Sequential build identifier compared by the update client
///
/// Newest release gets the highest number, oldest gets 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildNumber(usize);

impl BuildNumber {
    /// Build number for a 0-based newest-first rank among `total` releases: `total - rank`
    ///
    /// Returns `None` when `rank` is not below `total`.
    pub fn for_rank(rank: usize, total: usize) -> Option<Self> {
        if rank < total {
            Some(BuildNumber(total - rank))
        } else {
            None
        }
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = BUILD_NUMBER_WIDTH)
    }
}
