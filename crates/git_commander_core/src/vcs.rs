//! Version control capability.
//!
//! Workflows issue local version-control operations through this trait. The
//! production implementation is [`crate::git::GitCommandLine`], which shells
//! out to the `git` binary; tests substitute fakes that assert on the call
//! sequence and arguments without touching the filesystem.

use std::path::Path;

use async_trait::async_trait;

use crate::errors::Error;

/// Capability interface over local version-control operations.
///
/// Every method blocks the calling workflow until the underlying operation
/// completes. Failure is reported through the returned `Result`; the caller
/// decides whether to abort the workflow or continue with the next item.
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Clones `url` into `destination` as a working copy.
    async fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), Error>;

    /// Clones `url` into `destination` as a bare repository (history only,
    /// no working files).
    async fn clone_bare(&self, url: &str, destination: &Path) -> Result<(), Error>;

    /// Rewrites the author and committer identity of every commit on every
    /// branch and tag of the repository at `repo_path`.
    ///
    /// This is a destructive, irreversible rewrite that produces new commit
    /// identifiers. It operates only on the local repository; nothing is
    /// pushed.
    async fn rewrite_authors(
        &self,
        repo_path: &Path,
        author_name: &str,
        author_email: &str,
    ) -> Result<(), Error>;

    /// Points the named remote of the repository at `repo_path` at `url`.
    async fn set_remote(&self, repo_path: &Path, remote: &str, url: &str) -> Result<(), Error>;

    /// Pushes all refs (branches and tags) to the named remote, making the
    /// remote's ref set match the local one exactly and overwriting any
    /// divergent remote refs.
    async fn mirror_push(&self, repo_path: &Path, remote: &str) -> Result<(), Error>;

    /// Recursively and irreversibly deletes the directory tree at `path`.
    async fn remove_path(&self, path: &Path) -> Result<(), Error>;
}
