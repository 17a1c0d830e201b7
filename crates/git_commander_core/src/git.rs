//! Local Git repository operations.
//!
//! This module provides the process-backed [`VersionControl`] implementation.
//! Every operation is an awaited subprocess invocation of the `git` binary;
//! a non-zero exit status is mapped to [`Error::GitCommand`] with the
//! captured stderr. No retries, no timeouts.
//!
//! For GitHub API operations (creating and deleting repositories), see the
//! `github_client` crate.

use std::path::Path;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::errors::Error;
use crate::vcs::VersionControl;

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;

/// Shell fragment handed to `git filter-branch --env-filter`.
///
/// The new identity is supplied through the child process environment, never
/// interpolated into the script, so arbitrary operator input cannot break out
/// of it.
const ENV_FILTER_SCRIPT: &str = r#"
export GIT_AUTHOR_NAME="$NEW_AUTHOR_NAME"
export GIT_AUTHOR_EMAIL="$NEW_AUTHOR_EMAIL"
export GIT_COMMITTER_NAME="$NEW_AUTHOR_NAME"
export GIT_COMMITTER_EMAIL="$NEW_AUTHOR_EMAIL"
"#;

/// [`VersionControl`] implementation backed by the `git` binary.
#[derive(Debug, Default)]
pub struct GitCommandLine;

impl GitCommandLine {
    /// Creates a new instance. Requires `git` on the `PATH` at call time,
    /// not at construction.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VersionControl for GitCommandLine {
    async fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), Error> {
        let mut command = Command::new("git");
        command.arg("clone").arg(url).arg(destination);
        run(command).await
    }

    async fn clone_bare(&self, url: &str, destination: &Path) -> Result<(), Error> {
        let mut command = Command::new("git");
        command.arg("clone").arg("--bare").arg(url).arg(destination);
        run(command).await
    }

    async fn rewrite_authors(
        &self,
        repo_path: &Path,
        author_name: &str,
        author_email: &str,
    ) -> Result<(), Error> {
        let mut command = Command::new("git");
        command
            .arg("-C")
            .arg(repo_path)
            .arg("filter-branch")
            .arg("--force")
            .arg("--env-filter")
            .arg(ENV_FILTER_SCRIPT)
            .arg("--tag-name-filter")
            .arg("cat")
            .arg("--")
            .arg("--branches")
            .arg("--tags")
            .env("NEW_AUTHOR_NAME", author_name)
            .env("NEW_AUTHOR_EMAIL", author_email)
            .env("FILTER_BRANCH_SQUELCH_WARNING", "1");
        run(command).await
    }

    async fn set_remote(&self, repo_path: &Path, remote: &str, url: &str) -> Result<(), Error> {
        let mut command = Command::new("git");
        command
            .arg("-C")
            .arg(repo_path)
            .arg("remote")
            .arg("set-url")
            .arg(remote)
            .arg(url);
        run(command).await
    }

    async fn mirror_push(&self, repo_path: &Path, remote: &str) -> Result<(), Error> {
        let mut command = Command::new("git");
        command
            .arg("-C")
            .arg(repo_path)
            .arg("push")
            .arg("--mirror")
            .arg(remote);
        run(command).await
    }

    async fn remove_path(&self, path: &Path) -> Result<(), Error> {
        tokio::fs::remove_dir_all(path)
            .await
            .map_err(|source| Error::RemovePath {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Runs the prepared git command to completion, capturing its output.
async fn run(mut command: Command) -> Result<(), Error> {
    let rendered = render_command(&command);
    debug!(command = %rendered, "Running git command");

    let output = command.output().await.map_err(Error::GitSpawn)?;
    check_exit(rendered, &output)
}

fn check_exit(command: String, output: &Output) -> Result<(), Error> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    warn!(
        command = %command,
        status = %output.status,
        stderr = %stderr,
        "git command failed"
    );
    Err(Error::GitCommand {
        command,
        status: output.status.to_string(),
        stderr,
    })
}

/// Renders the command line for logs and error messages. The env-filter
/// script is elided to keep messages on one line.
fn render_command(command: &Command) -> String {
    let std_command = command.as_std();
    let mut rendered = std_command.get_program().to_string_lossy().into_owned();
    for arg in std_command.get_args() {
        let arg = arg.to_string_lossy();
        rendered.push(' ');
        if arg.contains('\n') {
            rendered.push_str("<script>");
        } else {
            rendered.push_str(&arg);
        }
    }
    rendered
}
