use crate::boundary::FeedWarning;
use crate::domain::{newest_first, OrderedRelease, RawRelease, VersionParser};

/// Releases sorted newest-first plus the ones that were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedReleases {
    pub releases: Vec<OrderedRelease>,
    pub skipped: Vec<FeedWarning>,
}

/// Parse every tag, drop the unparsable ones and stably sort the rest newest-first
///
/// Releases with equal versions keep their input order. Ranks are dense, 0 = newest.
pub fn order_releases(parser: &VersionParser, releases: Vec<RawRelease>) -> OrderedReleases {
    let mut skipped = Vec::new();
    let mut parsed = Vec::with_capacity(releases.len());

    for release in releases {
        match parser.parse(&release.tag_name) {
            Some(version) => parsed.push((release, version)),
            None => skipped.push(FeedWarning::UnparsableTag {
                tag: release.tag_name.clone(),
                reason: "Invalid version format".to_string(),
            }),
        }
    }

    // slice::sort_by is stable
    parsed.sort_by(|(_, a), (_, b)| newest_first(a, b));

    let releases = parsed
        .into_iter()
        .enumerate()
        .map(|(rank, (release, version))| OrderedRelease {
            release,
            version,
            rank,
        })
        .collect();

    OrderedReleases { releases, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(ordered: &OrderedReleases) -> Vec<&str> {
        ordered
            .releases
            .iter()
            .map(|r| r.release.tag_name.as_str())
            .collect()
    }

    fn order(input: &[&str]) -> OrderedReleases {
        let parser = VersionParser::new().unwrap();
        order_releases(&parser, input.iter().map(|t| RawRelease::new(*t)).collect())
    }

    #[test]
    fn test_orders_prereleases_numerically() {
        let ordered = order(&["v1.2.0", "v1.1.9", "v1.2.0-beta.2", "v1.2.0-beta.10"]);
        assert_eq!(
            tags(&ordered),
            vec!["v1.2.0", "v1.2.0-beta.10", "v1.2.0-beta.2", "v1.1.9"]
        );
        assert!(ordered.skipped.is_empty());
    }

    #[test]
    fn test_ranks_are_dense_from_zero() {
        let ordered = order(&["v0.1.0", "v0.3.0", "v0.2.0"]);
        let ranks: Vec<usize> = ordered.releases.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
        assert_eq!(tags(&ordered), vec!["v0.3.0", "v0.2.0", "v0.1.0"]);
    }

    #[test]
    fn test_skips_unparsable_tags() {
        let ordered = order(&["nightly", "v1.0.0", "latest-build", "v2.0.0"]);
        assert_eq!(tags(&ordered), vec!["v2.0.0", "v1.0.0"]);
        assert_eq!(
            ordered.skipped,
            vec![
                FeedWarning::UnparsableTag {
                    tag: "nightly".to_string(),
                    reason: "Invalid version format".to_string(),
                },
                FeedWarning::UnparsableTag {
                    tag: "latest-build".to_string(),
                    reason: "Invalid version format".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_equal_versions_keep_input_order() {
        let ordered = order(&["desktop-v1.0.0", "v0.9.0", "v1.0.0"]);
        assert_eq!(tags(&ordered), vec!["desktop-v1.0.0", "v1.0.0", "v0.9.0"]);

        let reversed = order(&["v1.0.0", "v0.9.0", "desktop-v1.0.0"]);
        assert_eq!(tags(&reversed), vec!["v1.0.0", "desktop-v1.0.0", "v0.9.0"]);
    }

    #[test]
    fn test_empty_input() {
        let ordered = order(&[]);
        assert!(ordered.releases.is_empty());
        assert!(ordered.skipped.is_empty());
    }
}
