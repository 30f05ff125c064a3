//! Import command - process every archive in the intake directory

use async_trait::async_trait;
use std::path::Path;
use zipmr::config::RunConfig;
use zipmr::error::{Error, Result};
use zipmr::git::SystemGit;
use zipmr::pipeline::{run_import, Phase, ProgressCallback, RunPaths};
use zipmr::platform::GitLabService;
use zipmr::types::MergeRequest;

/// CLI progress callback that prints to stdout
struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::PreparingWorkspace => println!("Preparing workspace..."),
            Phase::Extracting => println!("  Extracting..."),
            Phase::Sanitizing => println!("  Removing VCS metadata..."),
            Phase::Selecting => println!("  Copying allow-listed directories..."),
            Phase::Publishing => println!("  Publishing branch..."),
            Phase::RestoringBase => println!("  Restoring base branch..."),
            Phase::Complete => println!("Done!"),
        }
    }

    async fn on_archive_start(&self, file_name: &str) {
        println!("Processing {file_name}");
    }

    async fn on_merge_request_created(&self, mr: &MergeRequest) {
        println!("  ✓ Created MR !{}", mr.iid);
        println!("    {}", mr.web_url);
    }

    async fn on_error(&self, error: &Error) {
        eprintln!("  ✗ {error}");
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}

/// Run the import command over `work_root`
pub async fn run_import_command(work_root: &Path) -> Result<()> {
    let config = RunConfig::from_env()?;
    let paths = RunPaths::under(work_root);

    let git = SystemGit;
    let platform = GitLabService::new(
        config.token.clone(),
        config.project_id.clone(),
        config.gitlab_url.clone(),
    );

    let report = run_import(&config, &paths, &git, &platform, &CliProgress).await?;

    println!(
        "Published {} branch(es), created {} merge request(s)",
        report.published_branches.len(),
        report.created_merge_requests.len()
    );
    if !report.errors.is_empty() {
        eprintln!("{} merge request(s) failed:", report.errors.len());
        for error in &report.errors {
            eprintln!("  - {error}");
        }
    }

    Ok(())
}
