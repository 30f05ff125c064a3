//! zipmr - import zip bundles as merge requests
//!
//! CLI binary for the import pipeline.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "zipmr")]
#[command(about = "Import zip bundles into a git repository as GitLab merge requests")]
#[command(version)]
struct Cli {
    /// Directory holding zips/ and repository/ (defaults to current directory)
    #[arg(short, long)]
    work_root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();
    let work_root = args.work_root.unwrap_or_else(|| PathBuf::from("."));

    cli::run_import_command(&work_root).await?;

    Ok(())
}
