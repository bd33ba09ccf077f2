//! Main workflow orchestration logic
//!
//! Keeps the fetch → build → write sequence out of main.rs so it can be driven
//! programmatically (and from tests) without clap.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::appcast;
use crate::config::Config;
use crate::domain::VersionParser;
use crate::feed::build_feed;
use crate::source::{FileReleaseSource, GitHubReleaseSource, ReleaseSource};
use crate::ui;

/// Arguments for the appcast workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppcastWorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Read releases from this JSON file (`-` for stdin) instead of GitHub
    pub releases: Option<PathBuf>,

    /// Overrides the configured output path
    pub output: Option<PathBuf>,

    /// Render only, write nothing
    pub dry_run: bool,

    /// Fail when the pipeline reports any warning
    pub strict: bool,
}

/// Result of a successful appcast workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Items in the generated feed
    pub items: usize,

    /// Releases left out because their tag did not parse
    pub skipped: usize,

    /// Warnings reported during the run
    pub warnings: usize,

    /// Where the appcast was written; `None` on a dry run
    pub written_to: Option<PathBuf>,

    /// The rendered appcast
    pub xml: String,
}

/// Pick the release source for a run: a local JSON file when given, GitHub otherwise
pub fn select_source(
    args: &AppcastWorkflowArgs,
    config: &Config,
) -> Result<Box<dyn ReleaseSource>> {
    match &args.releases {
        Some(path) => Ok(Box::new(FileReleaseSource::new(path.clone()))),
        None => {
            let source = GitHubReleaseSource::from_config(config)
                .context("Failed to set up the GitHub client")?;
            Ok(Box::new(source))
        }
    }
}

/// Main appcast workflow
///
/// 1. Validate configuration
/// 2. Fetch releases from the source
/// 3. Build the feed document and report warnings
/// 4. Render XML and write it unless this is a dry run
///
/// # Arguments
///
/// * `args` - Workflow arguments (output override, dry_run, strict)
/// * `config` - Loaded configuration, environment overrides already applied
/// * `source` - Where the releases come from
///
/// # Returns
///
/// Result containing counts and the rendered XML, or the first fatal error
pub fn run_appcast_workflow(
    args: &AppcastWorkflowArgs,
    config: &Config,
    source: &dyn ReleaseSource,
) -> Result<WorkflowResult> {
    config.validate().context("Invalid configuration")?;

    ui::display_status(&format!("Fetching releases from {}...", source.describe()));
    let releases = source
        .fetch_releases()
        .with_context(|| format!("Failed to fetch releases from {}", source.describe()))?;
    ui::display_success(&format!("Fetched {} releases", releases.len()));

    let parser = VersionParser::new()?;
    let outcome = build_feed(&parser, releases, &config.feed_settings());

    let warnings = ui::report_warnings(&outcome.warnings);
    if args.strict && warnings > 0 {
        bail!("{} warning(s) reported and --strict is set", warnings);
    }

    ui::display_feed_summary(&outcome.document, outcome.skipped);

    let xml = appcast::render_appcast(&outcome.document)?;

    let written_to = if args.dry_run {
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| config.output.path.clone());
        std::fs::write(&path, &xml)
            .with_context(|| format!("Failed to write appcast to {}", path.display()))?;
        ui::display_success(&format!("Appcast written to {}", path.display()));
        Some(path)
    };

    Ok(WorkflowResult {
        items: outcome.document.items.len(),
        skipped: outcome.skipped,
        warnings,
        written_to,
        xml,
    })
}
