//! Tests for the bulk delete command handler.

use super::*;
use async_trait::async_trait;
use git_commander_core::{AccessToken, Error as CoreError};
use github_client::Repository;
use std::sync::Mutex;

struct FakeHost {
    repositories: Vec<Repository>,
    delete_calls: Mutex<Vec<(String, String)>>,
}

impl FakeHost {
    fn with_repositories(names: &[&str]) -> Self {
        Self {
            repositories: names
                .iter()
                .map(|name| Repository::new(name.to_string(), format!("octocat/{name}"), false))
                .collect(),
            delete_calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RepositoryHost for FakeHost {
    async fn list_repositories(&self) -> Result<Vec<Repository>, CoreError> {
        Ok(self.repositories.clone())
    }

    async fn create_repository(&self, _name: &str) -> Result<Repository, CoreError> {
        panic!("create_repository is not part of the delete command");
    }

    async fn delete_repository(&self, owner: &str, name: &str) -> Result<(), CoreError> {
        self.delete_calls
            .lock()
            .unwrap()
            .push((owner.to_string(), name.to_string()));
        Ok(())
    }
}

fn session() -> Session {
    let token = AccessToken::new("ghp_1234567890").unwrap();
    Session::new(token, "octocat").unwrap()
}

#[tokio::test]
async fn test_declining_the_confirmation_issues_zero_delete_calls() {
    let host = FakeHost::with_repositories(&["alpha", "beta"]);
    let prompts = Mutex::new(Vec::new());

    let result = handle_delete_command(&host, &session(), |message| {
        prompts.lock().unwrap().push(message.to_string());
        Ok(false)
    })
    .await
    .unwrap();

    assert!(result.is_none());
    assert!(host.delete_calls.lock().unwrap().is_empty());
    // The operator was shown the irreversibility warning before declining.
    assert_eq!(prompts.lock().unwrap().as_slice(), &[CONFIRM_MESSAGE]);
}

#[tokio::test]
async fn test_confirming_deletes_every_listed_repository() {
    let host = FakeHost::with_repositories(&["alpha", "beta", "gamma"]);

    let outcome = handle_delete_command(&host, &session(), |_| Ok(true))
        .await
        .unwrap()
        .expect("confirmed run returns an outcome");

    let calls = host.delete_calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|(owner, _)| owner == "octocat"));
    assert_eq!(outcome.attempted(), 3);
}

#[tokio::test]
async fn test_prompt_failure_issues_zero_delete_calls() {
    let host = FakeHost::with_repositories(&["alpha"]);

    let result = handle_delete_command(&host, &session(), |_| {
        Err(Error::Prompt("stdin closed".to_string()))
    })
    .await;

    assert!(matches!(result, Err(Error::Prompt(_))));
    assert!(host.delete_calls.lock().unwrap().is_empty());
}
