//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub
//! on behalf of a single user, authenticated with a personal access token.
//! It covers exactly the surface the bulk and migration workflows need:
//! listing, creating, and deleting the authenticated user's repositories.

use octocrab::{Octocrab, Result as OctocrabResult};
use tracing::{error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{Repository, RepositoryCreatePayload};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// A client for interacting with the GitHub API, authenticated as a user.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new client wrapping the given `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build an instance authenticated with a
    /// personal access token.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Lists the repositories of the authenticated user.
    ///
    /// Issues `GET /user/repos` and returns every repository in the response.
    ///
    /// Only the first page of results is returned; the GitHub API paginates
    /// this endpoint and this client does not follow the pagination links.
    /// Accounts with more repositories than one page holds will see the
    /// remainder silently omitted.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the API call fails or the response cannot be
    /// parsed. An invalid token surfaces as [`Error::AuthError`].
    #[instrument(skip(self))]
    pub async fn list_user_repositories(&self) -> Result<Vec<models::Repository>, Error> {
        let result: OctocrabResult<Vec<octocrab::models::Repository>> =
            self.client.get("/user/repos", None::<&()>).await;
        match result {
            Ok(repositories) => {
                info!(
                    repository_count = repositories.len(),
                    "Listed repositories for the authenticated user"
                );
                Ok(repositories
                    .into_iter()
                    .map(models::Repository::from)
                    .collect())
            }
            Err(e) => Err(map_octocrab_error("Failed to list repositories", e)),
        }
    }

    /// Creates a repository for the authenticated user.
    ///
    /// Issues `POST /user/repos` with the given payload. The payload defaults
    /// to public visibility; see [`RepositoryCreatePayload::public`].
    ///
    /// # Arguments
    ///
    /// * `payload` - The repository name and settings to create with.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the API call fails, for example on a name
    /// collision or when the token lacks the `repo` scope.
    #[instrument(skip(self), fields(name = %payload.name))]
    pub async fn create_user_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<models::Repository, Error> {
        let result: OctocrabResult<octocrab::models::Repository> =
            self.client.post("/user/repos", Some(payload)).await;
        match result {
            Ok(repository) => {
                let repository = models::Repository::from(repository);
                info!(
                    full_name = repository.full_name(),
                    "Created repository for the authenticated user"
                );
                Ok(repository)
            }
            Err(e) => Err(map_octocrab_error("Failed to create repository", e)),
        }
    }

    /// Deletes a repository.
    ///
    /// Issues `DELETE /repos/{owner}/{repo}`. The token must carry the
    /// `delete_repo` scope.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the repository does not exist, or
    /// another [`Error`] variant for other API failures.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    pub async fn delete_repository(&self, owner: &str, repo: &str) -> Result<(), Error> {
        match self.client.repos(owner, repo).delete().await {
            Ok(()) => {
                info!("Deleted repository");
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to delete repository", e)),
        }
    }
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Arguments
///
/// * `token` - A GitHub personal access token.
///
/// # Errors
///
/// Returns an `Error` if the `Octocrab` client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|_| Error::ApiError())
}

/// Logs an octocrab failure and maps it onto the crate error taxonomy.
///
/// GitHub-reported statuses map to the matching variant (401 to `AuthError`,
/// 403/429 to `RateLimitExceeded`, 404 to `NotFound`); everything else,
/// including transport failures, becomes `InvalidResponse`.
fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    let mapped = match &e {
        octocrab::Error::GitHub { source, .. } => match source.status_code.as_u16() {
            401 => Error::AuthError(source.message.clone()),
            403 | 429 => Error::RateLimitExceeded,
            404 => Error::NotFound,
            _ => Error::InvalidResponse,
        },
        _ => Error::InvalidResponse,
    };
    log_octocrab_error(message, e);
    mapped
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => error!(
            error_message = %source.message,
            status = %source.status_code,
            backtrace = backtrace.to_string(),
            "{}. Received an error from GitHub",
            message
        ),
        _ => error!(error_message = %e, message),
    };
}
