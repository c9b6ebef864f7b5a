//! Run credentials.
//!
//! SECURITY: `Debug` never prints passwords and the type is not `Serialize`.

use std::fmt;

use crate::domain::error::CredentialError;

/// Default CQ admin account.
pub const DEFAULT_USER: &str = "admin";

/// Admin user name plus the old and new passwords, shared by every target
/// and every step of a run.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    old_password: String,
    new_password: String,
}

impl Credentials {
    /// # Errors
    ///
    /// Returns an error if the user name or the new password is empty.
    pub fn new(
        username: impl Into<String>,
        old_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Result<Self, CredentialError> {
        let username = username.into();
        let new_password = new_password.into();
        if username.trim().is_empty() {
            return Err(CredentialError::EmptyUsername);
        }
        if new_password.is_empty() {
            return Err(CredentialError::EmptyNewPassword);
        }
        Ok(Self {
            username,
            old_password: old_password.into(),
            new_password,
        })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password the remote subsystems are still running under.
    #[must_use]
    pub fn old_password(&self) -> &str {
        &self.old_password
    }

    #[must_use]
    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("old_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}
