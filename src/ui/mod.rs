//! User interface module - formatting and reporting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Reporting of a whole pipeline run

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_feed_summary, display_feed_warning, display_status, display_success,
};

use crate::boundary::FeedWarning;

/// Prints every warning of a run.
///
/// Returns how many warnings were shown so callers can decide on `--strict`.
pub fn report_warnings(warnings: &[FeedWarning]) -> usize {
    for warning in warnings {
        display_feed_warning(warning);
    }
    warnings.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_warnings_counts() {
        let warnings = vec![
            FeedWarning::MissingSignature,
            FeedWarning::NoAssets {
                tag: "v1.0.0".to_string(),
            },
        ];
        assert_eq!(report_warnings(&warnings), 2);
        assert_eq!(report_warnings(&[]), 0);
    }
}
