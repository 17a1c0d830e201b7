//! Migration request type.

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

/// The operator-supplied parameters for a single migration run.
///
/// Captured once per invocation and fully consumed within it. Beyond
/// non-emptiness, nothing is validated: the source URL, repository name, and
/// author identity are passed through to git and the GitHub API as-is, and
/// malformed values surface as remote or subprocess errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationRequest {
    source_repo_url: String,
    new_repo_name: String,
    new_author_name: String,
    new_author_email: String,
}

impl MigrationRequest {
    /// Creates a new migration request.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first empty field, if any.
    pub fn new(
        source_repo_url: impl Into<String>,
        new_repo_name: impl Into<String>,
        new_author_name: impl Into<String>,
        new_author_email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            source_repo_url: source_repo_url.into(),
            new_repo_name: new_repo_name.into(),
            new_author_name: new_author_name.into(),
            new_author_email: new_author_email.into(),
        };

        for (field, value) in [
            ("source_repo_url", &request.source_repo_url),
            ("new_repo_name", &request.new_repo_name),
            ("new_author_name", &request.new_author_name),
            ("new_author_email", &request.new_author_email),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }

        Ok(request)
    }

    /// The URL of the repository whose history is migrated.
    pub fn source_repo_url(&self) -> &str {
        &self.source_repo_url
    }

    /// The name of the repository created under the operator's account.
    pub fn new_repo_name(&self) -> &str {
        &self.new_repo_name
    }

    /// The author and committer name stamped onto every rewritten commit.
    pub fn new_author_name(&self) -> &str {
        &self.new_author_name
    }

    /// The author and committer email stamped onto every rewritten commit.
    pub fn new_author_email(&self) -> &str {
        &self.new_author_email
    }
}
