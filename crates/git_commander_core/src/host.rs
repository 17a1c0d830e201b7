//! Repository hosting capability.
//!
//! Workflows talk to the hosting provider through this trait rather than a
//! concrete client, so tests can substitute a fake that records the call
//! sequence without touching the network.

use async_trait::async_trait;
use github_client::{GitHubClient, Repository, RepositoryCreatePayload};

use crate::errors::Error;

/// Capability interface over the repository hosting provider.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Lists the repositories of the authenticated user.
    async fn list_repositories(&self) -> Result<Vec<Repository>, Error>;

    /// Creates a public repository with the given name under the
    /// authenticated user's account.
    async fn create_repository(&self, name: &str) -> Result<Repository, Error>;

    /// Deletes the named repository.
    async fn delete_repository(&self, owner: &str, name: &str) -> Result<(), Error>;
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn list_repositories(&self) -> Result<Vec<Repository>, Error> {
        Ok(self.list_user_repositories().await?)
    }

    async fn create_repository(&self, name: &str) -> Result<Repository, Error> {
        let payload = RepositoryCreatePayload::public(name);
        Ok(self.create_user_repository(&payload).await?)
    }

    async fn delete_repository(&self, owner: &str, name: &str) -> Result<(), Error> {
        Ok(GitHubClient::delete_repository(self, owner, name).await?)
    }
}
