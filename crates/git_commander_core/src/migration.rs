//! Repository migration workflow.
//!
//! Migration runs a fixed, strictly sequential sequence of steps:
//!
//! ```text
//! CreateTargetRepo -> CloneSourceBare -> RewriteHistory ->
//! CloneBareToWorkingCopy -> SetRemoteOrigin -> MirrorPush -> Cleanup -> Done
//! ```
//!
//! Any step failure is terminal for the run; there are no retries. Once the
//! target repository exists, a failed run performs best-effort compensating
//! cleanup (delete the created remote repository, remove intermediate local
//! directories) so the operator is not left with orphaned artifacts. The
//! step that failed is what the caller sees; compensation failures are only
//! logged.

use std::path::{Path, PathBuf};

use github_client::Repository;
use tracing::{info, instrument, warn};

use crate::errors::Error;
use crate::host::RepositoryHost;
use crate::request::MigrationRequest;
use crate::vcs::VersionControl;

#[cfg(test)]
#[path = "migration_tests.rs"]
mod tests;

/// Machine-readable result of a successful migration.
#[derive(Clone, Debug)]
pub struct MigrationOutcome {
    /// The repository created under the operator's account, now holding the
    /// rewritten history.
    pub repository: Repository,
}

/// Migrates a repository: clone it bare, rewrite every commit's author and
/// committer identity, and mirror-push the result into a newly created
/// repository under the operator's account.
///
/// Intermediate clones are placed under `workdir`: the bare clone at
/// `<workdir>/<name>.git` and the working copy at `<workdir>/<name>`. On
/// success the bare clone is removed and the working copy is kept.
///
/// # Errors
///
/// Returns the error of the first failing step. The created remote
/// repository and intermediate directories are cleaned up best-effort before
/// returning.
#[instrument(skip(host, vcs, request), fields(new_repo_name = request.new_repo_name()))]
pub async fn migrate_repository<H, V>(
    host: &H,
    vcs: &V,
    request: &MigrationRequest,
    workdir: &Path,
) -> Result<MigrationOutcome, Error>
where
    H: RepositoryHost + ?Sized,
    V: VersionControl + ?Sized,
{
    let bare_path = workdir.join(format!("{}.git", request.new_repo_name()));
    let working_path: PathBuf = workdir.join(request.new_repo_name());

    // CreateTargetRepo. A failure here aborts before anything exists locally
    // or remotely, so there is nothing to compensate.
    let repository = host.create_repository(request.new_repo_name()).await?;
    info!(
        repository = repository.full_name(),
        "Created target repository"
    );

    // CloneSourceBare
    if let Err(e) = vcs.clone_bare(request.source_repo_url(), &bare_path).await {
        abort_migration(host, vcs, &repository, &[&bare_path]).await;
        return Err(e);
    }
    info!(bare_path = %bare_path.display(), "Cloned source repository");

    // RewriteHistory
    if let Err(e) = vcs
        .rewrite_authors(
            &bare_path,
            request.new_author_name(),
            request.new_author_email(),
        )
        .await
    {
        abort_migration(host, vcs, &repository, &[&bare_path]).await;
        return Err(e);
    }
    info!("Rewrote author information on all branches and tags");

    // CloneBareToWorkingCopy
    let bare_url = bare_path.display().to_string();
    if let Err(e) = vcs.clone_repository(&bare_url, &working_path).await {
        abort_migration(host, vcs, &repository, &[&bare_path, &working_path]).await;
        return Err(e);
    }

    // SetRemoteOrigin
    if let Err(e) = vcs
        .set_remote(&working_path, "origin", repository.clone_url())
        .await
    {
        abort_migration(host, vcs, &repository, &[&bare_path, &working_path]).await;
        return Err(e);
    }

    // MirrorPush
    if let Err(e) = vcs.mirror_push(&working_path, "origin").await {
        abort_migration(host, vcs, &repository, &[&bare_path, &working_path]).await;
        return Err(e);
    }
    info!(
        repository = repository.full_name(),
        "Pushed all refs to the new repository"
    );

    // Cleanup. The push already succeeded, so a failure here is reported but
    // does not demote the migration result.
    if let Err(e) = vcs.remove_path(&bare_path).await {
        warn!(
            bare_path = %bare_path.display(),
            error = %e,
            "Failed to remove the intermediate bare clone"
        );
    }

    info!(
        repository = repository.full_name(),
        "Repository migration completed successfully"
    );
    Ok(MigrationOutcome { repository })
}

/// Best-effort compensating cleanup after a failed step.
///
/// Deletes the repository created at the start of the run and removes the
/// intermediate local directories. Every compensation failure is logged and
/// swallowed so the original step error reaches the operator unchanged.
async fn abort_migration<H, V>(
    host: &H,
    vcs: &V,
    repository: &Repository,
    local_paths: &[&Path],
) where
    H: RepositoryHost + ?Sized,
    V: VersionControl + ?Sized,
{
    warn!(
        repository = repository.full_name(),
        "Migration step failed, cleaning up partial state"
    );

    match repository.full_name().split_once('/') {
        Some((owner, name)) => {
            if let Err(e) = host.delete_repository(owner, name).await {
                warn!(
                    repository = repository.full_name(),
                    error = %e,
                    "Failed to delete the partially created repository"
                );
            }
        }
        None => warn!(
            repository = repository.full_name(),
            "Cannot derive owner from repository name, leaving the remote repository in place"
        ),
    }

    for path in local_paths {
        if let Err(e) = vcs.remove_path(path).await {
            // The directory may legitimately not exist when the step that
            // would have created it is the one that failed.
            warn!(path = %path.display(), error = %e, "Failed to remove intermediate directory");
        }
    }
}
