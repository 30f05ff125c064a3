//! Run orchestrator
//!
//! Drives extract → sanitize → select → publish over every archive in the
//! intake directory, strictly one archive at a time: all of them share the
//! single working tree, so the orchestrator itself enforces mutual exclusion
//! by sequencing. The base branch is restored between archives.

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::extract::extract_archive;
use crate::git::GitClient;
use crate::pipeline::{Phase, ProgressCallback};
use crate::platform::{merge_request_title, PlatformService};
use crate::tree::{sanitize_tree, select_subtrees};
use crate::types::{Archive, MergeRequest};
use crate::workspace::Workspace;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// On-disk layout for one run
#[derive(Debug, Clone)]
pub struct RunPaths {
    /// Directory scanned for `*.zip` archives (auto-created)
    pub intake_dir: PathBuf,
    /// Location of the working-tree clone (recreated every run)
    pub repo_dir: PathBuf,
    /// Parent for per-archive scratch directories
    pub scratch_root: PathBuf,
}

impl RunPaths {
    /// Conventional layout under `work_root`: `zips/`, `repository/`, and
    /// scratch directories as direct children of the root
    pub fn under(work_root: &Path) -> Self {
        Self {
            intake_dir: work_root.join("zips"),
            repo_dir: work_root.join("repository"),
            scratch_root: work_root.to_path_buf(),
        }
    }
}

/// Outcome of an import run
///
/// Merge-request API failures are collected here rather than aborting the
/// run; every other failure propagates as an error from [`run_import`].
#[derive(Debug, Default)]
pub struct RunReport {
    /// Branches that were committed and force-pushed
    pub published_branches: Vec<String>,
    /// Merge requests the platform confirmed
    pub created_merge_requests: Vec<MergeRequest>,
    /// Non-fatal errors (merge-request API rejections)
    pub errors: Vec<String>,
}

/// Import every archive in the intake directory
///
/// Fatal on workspace preparation, filesystem, commit, or push failures; a
/// merge-request API failure is logged, recorded in the report, and the next
/// archive is still attempted.
pub async fn run_import(
    config: &RunConfig,
    paths: &RunPaths,
    git: &dyn GitClient,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
) -> Result<RunReport> {
    fs::create_dir_all(&paths.intake_dir)?;

    progress.on_phase(Phase::PreparingWorkspace).await;
    let workspace = Workspace::prepare(
        paths.repo_dir.clone(),
        git,
        &config.repository_url,
        &config.base_branch,
    )
    .await?;

    let archives = list_archives(&paths.intake_dir)?;
    if archives.is_empty() {
        progress.on_message("No archives found in intake directory").await;
    }

    let mut report = RunReport::default();

    for archive in &archives {
        progress.on_archive_start(&archive.file_name).await;
        info!(archive = %archive.file_name, "processing archive");

        let scratch = paths.scratch_root.join(&archive.stem);
        let outcome = process_archive(
            config,
            &workspace,
            platform,
            progress,
            archive,
            &scratch,
            &mut report,
        )
        .await;

        // Scratch space is removed on success and failure alike
        if scratch.exists() {
            if let Err(e) = fs::remove_dir_all(&scratch) {
                warn!(path = %scratch.display(), error = %e, "failed to remove scratch directory");
            }
        }
        outcome?;

        progress.on_phase(Phase::RestoringBase).await;
        workspace.checkout(&config.base_branch).await?;
    }

    progress.on_phase(Phase::Complete).await;
    Ok(report)
}

/// List `*.zip` entries in directory-listing order (not otherwise sorted)
pub fn list_archives(intake_dir: &Path) -> Result<Vec<Archive>> {
    let entries = fs::read_dir(intake_dir).map_err(|e| Error::IntakeUnreadable {
        path: intake_dir.to_path_buf(),
        detail: e.to_string(),
    })?;

    let mut archives = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(archive) = Archive::from_path(entry.path()) {
            archives.push(archive);
        }
    }
    Ok(archives)
}

async fn process_archive(
    config: &RunConfig,
    workspace: &Workspace<'_>,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
    archive: &Archive,
    scratch: &Path,
    report: &mut RunReport,
) -> Result<()> {
    progress.on_phase(Phase::Extracting).await;
    extract_archive(&archive.path, scratch)?;

    // Sanitization must finish before selection so embedded VCS metadata
    // never reaches the working tree
    progress.on_phase(Phase::Sanitizing).await;
    sanitize_tree(scratch)?;

    progress.on_phase(Phase::Selecting).await;
    select_subtrees(scratch, &config.known_directories, workspace.root())?;

    progress.on_phase(Phase::Publishing).await;
    let branch = archive.branch_name(&config.branch_prefix);
    workspace.create_branch(&branch).await?;
    workspace.commit_all(&archive.commit_message()).await?;
    workspace.push(&branch).await?;
    report.published_branches.push(branch.clone());

    let title = merge_request_title(&branch, &config.base_branch);
    match platform
        .create_merge_request(&branch, &config.base_branch, &title)
        .await
    {
        Ok(mr) => {
            info!(url = %mr.web_url, branch = %branch, "merge request created");
            progress.on_merge_request_created(&mr).await;
            report.created_merge_requests.push(mr);
        }
        Err(e) => {
            // The only non-fatal failure in the run: log and keep going
            error!(branch = %branch, error = %e, "merge request creation failed");
            progress.on_error(&e).await;
            report.errors.push(format!("{branch}: {e}"));
        }
    }

    Ok(())
}
