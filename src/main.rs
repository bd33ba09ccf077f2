use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use appcast_gen::cli::{run_appcast_workflow, select_source, AppcastWorkflowArgs};
use appcast_gen::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "appcast-gen",
    version,
    about = "Generate a Sparkle appcast from GitHub releases"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Read releases from a JSON file ('-' for stdin) instead of GitHub"
    )]
    releases: Option<PathBuf>,

    #[arg(short, long, value_name = "PATH", help = "Where to write the appcast")]
    output: Option<PathBuf>,

    #[arg(long, help = "Print the appcast instead of writing it")]
    dry_run: bool,

    #[arg(long, help = "Fail when any release produces a warning")]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = AppcastWorkflowArgs {
        config_path: args.config,
        releases: args.releases,
        output: args.output,
        dry_run: args.dry_run,
        strict: args.strict,
    };

    let source = match select_source(&workflow_args, &config) {
        Ok(source) => source,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    match run_appcast_workflow(&workflow_args, &config, source.as_ref()) {
        Ok(result) => {
            if workflow_args.dry_run {
                print!("{}", result.xml);
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("Error updating appcast: {:#}", e));
            std::process::exit(1);
        }
    }
}
