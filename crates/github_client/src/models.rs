//! Repository domain types.
//!
//! This module contains the types exchanged with the GitHub REST API for
//! repository listing and creation.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a GitHub repository.
///
/// This struct contains the subset of repository information the bulk and
/// migration workflows need: the name, visibility, and the URLs used for git
/// transport and for reporting back to the operator.
///
/// # Examples
///
/// ```rust
/// use github_client::Repository;
///
/// let repo = Repository::new(
///     "my-repo".to_string(),
///     "owner/my-repo".to_string(),
///     false,
/// );
///
/// println!("Repository: {}", repo.name());
/// println!("Clone URL: {}", repo.clone_url());
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct Repository {
    /// The full name of the repository (owner/name)
    full_name: String,
    /// The name of the repository
    name: String,
    /// Whether the repository is private
    private: bool,
    /// The URL used for git clone/push transport
    clone_url: String,
    /// The URL of the repository's web page
    html_url: String,
}

impl Repository {
    /// Creates a new Repository instance with URLs derived from the full name.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the repository
    /// * `full_name` - The full name including owner (owner/repo)
    /// * `private` - Whether the repository is private
    pub fn new(name: String, full_name: String, private: bool) -> Self {
        let clone_url = format!("https://github.com/{}.git", full_name);
        let html_url = format!("https://github.com/{}", full_name);
        Self {
            full_name,
            name,
            private,
            clone_url,
            html_url,
        }
    }

    /// Returns the name of the repository (without owner).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full name of the repository (owner/name).
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns whether the repository is private.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Returns the URL used for git clone and push operations.
    pub fn clone_url(&self) -> &str {
        &self.clone_url
    }

    /// Returns the URL of the repository's web page.
    pub fn html_url(&self) -> &str {
        &self.html_url
    }
}

impl From<octocrab::models::Repository> for Repository {
    fn from(value: octocrab::models::Repository) -> Self {
        let full_name = value.full_name.unwrap_or_else(|| value.name.clone());
        let clone_url = value
            .clone_url
            .map(|u| u.to_string())
            .unwrap_or_else(|| format!("https://github.com/{}.git", full_name));
        let html_url = value
            .html_url
            .map(|u| u.to_string())
            .unwrap_or_else(|| format!("https://github.com/{}", full_name));
        Self {
            full_name,
            name: value.name,
            private: value.private.unwrap_or(false),
            clone_url,
            html_url,
        }
    }
}

/// Request body for creating a repository for the authenticated user.
///
/// Serialized as the JSON body of `POST /user/repos`. Visibility defaults to
/// public, matching the tool's migration workflow.
#[derive(Clone, Debug, Serialize)]
pub struct RepositoryCreatePayload {
    /// The name of the repository to create
    pub name: String,
    /// An optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the repository should be private
    pub private: bool,
}

impl RepositoryCreatePayload {
    /// Creates a payload for a public repository with the given name.
    pub fn public(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            private: false,
        }
    }
}

impl Default for RepositoryCreatePayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            private: false,
        }
    }
}
