//! Bulk delete command.

use colored::Colorize;
use git_commander_core::{delete_all, BulkOutcome, RepositoryHost, Session};

use crate::errors::Error;

#[cfg(test)]
#[path = "delete_cmd_tests.rs"]
mod tests;

/// The warning shown before anything is deleted.
pub const CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete all your repositories? This action cannot be undone.";

/// Handles "Delete All Repositories".
///
/// Asks for confirmation through the injected closure before any API call is
/// made. Declining aborts with zero delete calls and returns `Ok(None)`.
/// Confirming deletes every listed repository, skipping over per-item
/// failures, and returns the aggregated outcome.
///
/// # Errors
///
/// Returns an [`Error`] if the prompt fails or the repository listing call
/// fails; per-item failures are reported through the returned outcome.
pub async fn handle_delete_command<H, F>(
    host: &H,
    session: &Session,
    confirm: F,
) -> Result<Option<BulkOutcome>, Error>
where
    H: RepositoryHost + ?Sized,
    F: Fn(&str) -> Result<bool, Error>,
{
    println!("{}", "\nDelete All Repositories".red().bold());

    if !confirm(CONFIRM_MESSAGE)? {
        println!("Action aborted.");
        return Ok(None);
    }

    let outcome = delete_all(host, session).await?;

    for name in &outcome.succeeded {
        println!("Repository {} deleted successfully!", name);
    }
    for failure in &outcome.failed {
        eprintln!(
            "{}",
            format!(
                "Error deleting repository {}: {}",
                failure.repository, failure.reason
            )
            .red()
        );
    }

    Ok(Some(outcome))
}
