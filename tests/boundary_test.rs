use appcast_gen::boundary::FeedWarning;
use appcast_gen::ui;

// ============================================================================
// FeedWarning Display Tests
// ============================================================================

#[test]
fn test_unparsable_tag_display() {
    let warning = FeedWarning::UnparsableTag {
        tag: "nightly".to_string(),
        reason: "Invalid version format".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Skipping release 'nightly'"),
        "Message should name the skipped tag, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("Invalid version format"),
        "Message should contain the reason, got: {}",
        display_msg
    );
}

#[test]
fn test_no_assets_display() {
    let warning = FeedWarning::NoAssets {
        tag: "v1.0.0".to_string(),
    };
    let display_msg = warning.to_string();
    assert!(display_msg.contains("v1.0.0"));
    assert!(
        display_msg.contains("length set to 0"),
        "Message should explain the default, got: {}",
        display_msg
    );
}

#[test]
fn test_missing_publish_date_display() {
    let warning = FeedWarning::MissingPublishDate {
        tag: "v0.9.0".to_string(),
    };
    assert!(warning.to_string().contains("Unix epoch"));
}

#[test]
fn test_missing_signature_display() {
    assert!(FeedWarning::MissingSignature
        .to_string()
        .contains("signature"));
}

#[test]
fn test_no_publishable_releases_display() {
    let warning = FeedWarning::NoPublishableReleases { total: 3 };
    assert_eq!(
        warning.to_string(),
        "None of the 3 releases has a usable version tag"
    );
}

#[test]
fn test_warning_equality() {
    let a = FeedWarning::NoAssets {
        tag: "v1.0.0".to_string(),
    };
    let b = FeedWarning::NoAssets {
        tag: "v1.0.0".to_string(),
    };
    let c = FeedWarning::NoAssets {
        tag: "v1.0.1".to_string(),
    };
    assert_eq!(a, b);
    assert_ne!(a, c);
}

// ============================================================================
// Reporting Tests
// ============================================================================

#[test]
fn test_report_every_warning_kind() {
    let warnings = vec![
        FeedWarning::UnparsableTag {
            tag: "latest".to_string(),
            reason: "Invalid version format".to_string(),
        },
        FeedWarning::NoAssets {
            tag: "v1.0.0".to_string(),
        },
        FeedWarning::MissingPublishDate {
            tag: "v1.0.0".to_string(),
        },
        FeedWarning::MissingSignature,
        FeedWarning::NoPublishableReleases { total: 1 },
    ];

    assert_eq!(ui::report_warnings(&warnings), warnings.len());
}
