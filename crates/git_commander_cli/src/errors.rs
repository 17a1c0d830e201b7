//! Error types for the GitCommander CLI.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors surfaced by the interactive CLI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An interactive prompt could not be read.
    #[error("Failed to read input: {0}")]
    Prompt(String),

    /// A workflow (bulk clone, bulk delete, migration) failed.
    #[error(transparent)]
    Workflow(#[from] git_commander_core::Error),

    /// Operator input failed a precondition check.
    #[error(transparent)]
    InvalidInput(#[from] git_commander_core::ValidationError),

    /// The GitHub client could not be initialized.
    #[error("Failed to initialize the GitHub client: {0}")]
    GitHub(#[from] github_client::Error),
}
