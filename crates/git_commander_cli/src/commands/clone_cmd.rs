//! Bulk clone command.

use std::path::PathBuf;

use colored::Colorize;
use git_commander_core::{clone_all, BulkOutcome, RepositoryHost, VersionControl};

use crate::errors::Error;

#[cfg(test)]
#[path = "clone_cmd_tests.rs"]
mod tests;

/// Default destination folder offered by the prompt.
pub const DEFAULT_DESTINATION: &str = "./repositories";

/// Handles "Clone All Repositories".
///
/// Asks for the destination folder through the injected closure, clones
/// every repository of the authenticated user beneath it, and prints the
/// per-repository report. Individual clone failures are reported but do not
/// stop the run.
///
/// # Errors
///
/// Returns an [`Error`] if the prompt fails or the repository listing call
/// fails; per-item failures are reported through the returned outcome.
pub async fn handle_clone_command<H, V, F>(
    host: &H,
    vcs: &V,
    ask_destination: F,
) -> Result<BulkOutcome, Error>
where
    H: RepositoryHost + ?Sized,
    V: VersionControl + ?Sized,
    F: Fn() -> Result<String, Error>,
{
    println!("{}", "\nClone All Repositories".bold());

    let destination = PathBuf::from(ask_destination()?);
    let outcome = clone_all(host, vcs, &destination).await?;

    for name in &outcome.succeeded {
        println!(
            "Repository {} cloned successfully to {}",
            name,
            destination.join(name).display()
        );
    }
    for failure in &outcome.failed {
        eprintln!(
            "{}",
            format!(
                "Error cloning repository {}: {}",
                failure.repository, failure.reason
            )
            .red()
        );
    }

    Ok(outcome)
}
