//! Tests for the bulk clone command handler.

use super::*;
use async_trait::async_trait;
use git_commander_core::Error as CoreError;
use github_client::Repository;
use std::path::Path;
use std::sync::Mutex;

struct FakeHost {
    repositories: Vec<Repository>,
}

impl FakeHost {
    fn with_repositories(names: &[&str]) -> Self {
        Self {
            repositories: names
                .iter()
                .map(|name| Repository::new(name.to_string(), format!("octocat/{name}"), false))
                .collect(),
        }
    }
}

#[async_trait]
impl RepositoryHost for FakeHost {
    async fn list_repositories(&self) -> Result<Vec<Repository>, CoreError> {
        Ok(self.repositories.clone())
    }

    async fn create_repository(&self, _name: &str) -> Result<Repository, CoreError> {
        panic!("create_repository is not part of the clone command");
    }

    async fn delete_repository(&self, _owner: &str, _name: &str) -> Result<(), CoreError> {
        panic!("delete_repository is not part of the clone command");
    }
}

#[derive(Default)]
struct FakeVcs {
    clone_calls: Mutex<Vec<(String, PathBuf)>>,
    failing_url: Option<String>,
}

#[async_trait]
impl VersionControl for FakeVcs {
    async fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), CoreError> {
        self.clone_calls
            .lock()
            .unwrap()
            .push((url.to_string(), destination.to_path_buf()));
        if self.failing_url.as_deref() == Some(url) {
            return Err(CoreError::GitCommand {
                command: format!("git clone {url}"),
                status: "exit status: 128".to_string(),
                stderr: "fatal: repository not found".to_string(),
            });
        }
        Ok(())
    }

    async fn clone_bare(&self, _url: &str, _destination: &Path) -> Result<(), CoreError> {
        panic!("clone_bare is not part of the clone command");
    }

    async fn rewrite_authors(
        &self,
        _repo_path: &Path,
        _author_name: &str,
        _author_email: &str,
    ) -> Result<(), CoreError> {
        panic!("rewrite_authors is not part of the clone command");
    }

    async fn set_remote(
        &self,
        _repo_path: &Path,
        _remote: &str,
        _url: &str,
    ) -> Result<(), CoreError> {
        panic!("set_remote is not part of the clone command");
    }

    async fn mirror_push(&self, _repo_path: &Path, _remote: &str) -> Result<(), CoreError> {
        panic!("mirror_push is not part of the clone command");
    }

    async fn remove_path(&self, _path: &Path) -> Result<(), CoreError> {
        panic!("remove_path is not part of the clone command");
    }
}

#[tokio::test]
async fn test_clone_command_uses_the_prompted_destination() {
    let host = FakeHost::with_repositories(&["alpha", "beta"]);
    let vcs = FakeVcs::default();

    let outcome = handle_clone_command(&host, &vcs, || Ok("cloned-here".to_string()))
        .await
        .unwrap();

    let calls = vcs.clone_calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, PathBuf::from("cloned-here/alpha"));
    assert_eq!(calls[1].1, PathBuf::from("cloned-here/beta"));
    assert!(outcome.is_complete_success());
}

#[tokio::test]
async fn test_clone_command_reports_failures_without_aborting() {
    let host = FakeHost::with_repositories(&["alpha", "beta", "gamma"]);
    let vcs = FakeVcs {
        failing_url: Some("https://github.com/octocat/beta.git".to_string()),
        ..FakeVcs::default()
    };

    let outcome = handle_clone_command(&host, &vcs, || Ok("repositories".to_string()))
        .await
        .unwrap();

    assert_eq!(vcs.clone_calls.lock().unwrap().len(), 3);
    assert_eq!(outcome.succeeded, vec!["alpha", "gamma"]);
    assert_eq!(outcome.failed[0].repository, "beta");
}

#[tokio::test]
async fn test_clone_command_fails_before_cloning_when_the_prompt_fails() {
    let host = FakeHost::with_repositories(&["alpha"]);
    let vcs = FakeVcs::default();

    let result = handle_clone_command(&host, &vcs, || {
        Err(Error::Prompt("stdin closed".to_string()))
    })
    .await;

    assert!(matches!(result, Err(Error::Prompt(_))));
    assert!(vcs.clone_calls.lock().unwrap().is_empty());
}
