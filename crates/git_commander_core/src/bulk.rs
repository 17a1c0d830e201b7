//! Bulk clone and bulk delete workflows.
//!
//! Both workflows list the authenticated user's repositories once, then
//! attempt the operation on every item. A single-item failure is recorded
//! and never stops iteration over the remaining items; only the initial
//! listing call can fail the whole workflow. The aggregated [`BulkOutcome`]
//! is returned to the caller instead of being printed, so callers and tests
//! can assert on it.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::errors::Error;
use crate::host::RepositoryHost;
use crate::session::Session;
use crate::vcs::VersionControl;

#[cfg(test)]
#[path = "bulk_tests.rs"]
mod tests;

/// One repository that could not be processed, with the reason.
#[derive(Clone, Debug)]
pub struct BulkFailure {
    /// The repository name as returned by the listing call.
    pub repository: String,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Aggregated result of a best-effort bulk operation.
#[derive(Clone, Debug, Default)]
pub struct BulkOutcome {
    /// Names of the repositories processed successfully, in list order.
    pub succeeded: Vec<String>,
    /// Repositories that failed, in list order, with reasons.
    pub failed: Vec<BulkFailure>,
}

impl BulkOutcome {
    /// Total number of repositories attempted.
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// `true` when every attempted repository succeeded.
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }

    fn record_success(&mut self, repository: &str) {
        self.succeeded.push(repository.to_string());
    }

    fn record_failure(&mut self, repository: &str, reason: String) {
        self.failed.push(BulkFailure {
            repository: repository.to_string(),
            reason,
        });
    }
}

/// Clones every repository of the authenticated user under `destination`.
///
/// Each repository is cloned to `<destination>/<name>`, one at a time, in
/// provider list order. A failing clone is recorded and the loop continues
/// with the next repository.
///
/// # Errors
///
/// Returns an [`Error`] only if the listing call itself fails; per-item
/// failures are reported through the returned [`BulkOutcome`].
#[instrument(skip(host, vcs), fields(destination = %destination.display()))]
pub async fn clone_all<H, V>(host: &H, vcs: &V, destination: &Path) -> Result<BulkOutcome, Error>
where
    H: RepositoryHost + ?Sized,
    V: VersionControl + ?Sized,
{
    let repositories = host.list_repositories().await?;
    info!(
        repository_count = repositories.len(),
        "Cloning all repositories"
    );

    let mut outcome = BulkOutcome::default();
    for repository in &repositories {
        let clone_path = destination.join(repository.name());
        match vcs
            .clone_repository(repository.clone_url(), &clone_path)
            .await
        {
            Ok(()) => {
                info!(
                    repository = repository.name(),
                    clone_path = %clone_path.display(),
                    "Cloned repository"
                );
                outcome.record_success(repository.name());
            }
            Err(e) => {
                warn!(
                    repository = repository.name(),
                    error = %e,
                    "Failed to clone repository, continuing with the next one"
                );
                outcome.record_failure(repository.name(), e.to_string());
            }
        }
    }

    Ok(outcome)
}

/// Deletes every repository of the authenticated user.
///
/// Issues exactly one delete call per listed repository, in provider list
/// order. A failing delete is recorded and the loop continues with the next
/// repository.
///
/// The confirmation gate lives with the caller; this function assumes the
/// operator has already confirmed the action.
///
/// # Errors
///
/// Returns an [`Error`] only if the listing call itself fails; per-item
/// failures are reported through the returned [`BulkOutcome`].
#[instrument(skip(host, session), fields(username = session.username()))]
pub async fn delete_all<H>(host: &H, session: &Session) -> Result<BulkOutcome, Error>
where
    H: RepositoryHost + ?Sized,
{
    let repositories = host.list_repositories().await?;
    info!(
        repository_count = repositories.len(),
        "Deleting all repositories"
    );

    let mut outcome = BulkOutcome::default();
    for repository in &repositories {
        match host
            .delete_repository(session.username(), repository.name())
            .await
        {
            Ok(()) => {
                info!(repository = repository.name(), "Deleted repository");
                outcome.record_success(repository.name());
            }
            Err(e) => {
                warn!(
                    repository = repository.name(),
                    error = %e,
                    "Failed to delete repository, continuing with the next one"
                );
                outcome.record_failure(repository.name(), e.to_string());
            }
        }
    }

    Ok(outcome)
}
