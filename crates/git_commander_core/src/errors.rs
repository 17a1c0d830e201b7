//! Error types for the core workflows.

use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while running a workflow.
///
/// Remote API failures and local git command failures are the two dominant
/// classes; both abort the migration workflow and are skipped per-item by the
/// bulk workflows.
#[derive(Debug, Error)]
pub enum Error {
    /// A remote API operation failed.
    #[error("GitHub API operation failed: {0}")]
    Host(#[from] github_client::Error),

    /// A git subprocess exited with a non-zero status.
    ///
    /// Carries the invoked command line, the exit status, and the captured
    /// stderr so the operator can see what git itself reported.
    #[error("{command} exited with {status}: {stderr}")]
    GitCommand {
        command: String,
        status: String,
        stderr: String,
    },

    /// The git binary could not be launched at all.
    #[error("Failed to launch git: {0}")]
    GitSpawn(std::io::Error),

    /// A local directory tree could not be removed.
    #[error("Failed to remove {path}: {source}")]
    RemovePath {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Operator-supplied input failed a precondition check.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Input precondition failures.
///
/// The tool deliberately validates almost nothing: URLs, repository names and
/// email addresses are passed through to git and the GitHub API as-is. The
/// one check that is enforced is non-emptiness, so that no remote operation
/// runs with a blank credential or target.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field was empty or whitespace-only.
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },
}

impl ValidationError {
    /// Creates a [`ValidationError::EmptyField`] for the named field.
    pub fn empty_field(field: &'static str) -> Self {
        Self::EmptyField { field }
    }
}
