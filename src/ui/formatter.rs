//! Pure formatting functions for UI output.
//!
//! Message builders return plain strings so they can be tested; the `display_*`
//! functions add color with `console` (dropped automatically when not on a terminal)
//! and print. Everything goes to stderr: stdout is reserved for `--dry-run` XML.

use console::style;

use crate::boundary::FeedWarning;
use crate::feed::FeedDocument;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal feed warning on stderr.
pub fn display_feed_warning(warning: &FeedWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the items that made it into the feed, newest first.
///
/// Shows at most 10 rows; the remainder is summarized as a count.
pub fn display_feed_summary(document: &FeedDocument, skipped: usize) {
    eprintln!("\n{}", style(feed_summary_heading(document, skipped)).bold());
    for line in feed_summary_lines(document, 10) {
        eprintln!("  {}", line);
    }
}

/// Heading for the feed summary, e.g. "Appcast with 4 items (1 release skipped)"
pub fn feed_summary_heading(document: &FeedDocument, skipped: usize) -> String {
    let count = document.items.len();
    let mut heading = format!(
        "Appcast with {} item{}",
        count,
        if count == 1 { "" } else { "s" }
    );
    if skipped > 0 {
        heading.push_str(&format!(
            " ({} release{} skipped)",
            skipped,
            if skipped == 1 { "" } else { "s" }
        ));
    }
    heading
}

/// One line per item: build number then version, plus an overflow line
pub fn feed_summary_lines(document: &FeedDocument, limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = document
        .items
        .iter()
        .take(limit)
        .map(|item| format!("{}  {}", item.build_number, item.short_version))
        .collect();

    if document.items.len() > limit {
        lines.push(format!("... and {} more", document.items.len() - limit));
    }
    lines
}
