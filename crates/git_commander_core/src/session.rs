//! Operator session types.
//!
//! The access token and username are captured once at startup and held only
//! in memory for the lifetime of the process. A [`Session`] can only be
//! constructed with non-empty fields, which makes "not yet authenticated" an
//! unrepresentable state for every workflow that takes one.

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

/// GitHub access token (secure, not logged).
///
/// The token value never appears in `Debug` or `Display` output; only its
/// length is exposed for logging.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the token is empty or whitespace-only.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ValidationError::empty_field("access_token"));
        }
        Ok(Self(token))
    }

    /// Returns the token value.
    ///
    /// Use with caution - prefer passing the `AccessToken` itself.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token length, for logging without exposing the value.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; an empty token cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Security: never log the actual token value
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccessToken([REDACTED {} chars])", self.0.len())
    }
}

impl std::fmt::Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

/// The operator's credentials for the lifetime of the process.
///
/// Captured once at startup and passed by reference into each workflow; never
/// written to disk.
#[derive(Clone, Debug)]
pub struct Session {
    token: AccessToken,
    username: String,
}

impl Session {
    /// Creates a new session.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the username is empty or
    /// whitespace-only. The token is validated by [`AccessToken::new`].
    pub fn new(token: AccessToken, username: impl Into<String>) -> Result<Self, ValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        Ok(Self { token, username })
    }

    /// Returns the access token.
    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Returns the GitHub username the session operates on.
    pub fn username(&self) -> &str {
        &self.username
    }
}
