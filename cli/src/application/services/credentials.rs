//! Application service — credential resolution.
//!
//! Passwords given as flags or environment variables are used as-is; the
//! injected [`SecretPrompt`] supplies whichever is missing.

use anyhow::{Context, Result};

use crate::application::ports::SecretPrompt;
use crate::domain::Credentials;

pub const OLD_PASSWORD_PROMPT: &str = "Enter old admin password";
pub const NEW_PASSWORD_PROMPT: &str = "Enter new admin password";

/// Build the run credentials, prompting for missing passwords.
///
/// # Errors
///
/// Returns an error if prompting fails or the credentials are invalid.
pub fn resolve_credentials(
    user: &str,
    old_password: Option<String>,
    new_password: Option<String>,
    prompt: &impl SecretPrompt,
) -> Result<Credentials> {
    let old_password = match old_password {
        Some(pwd) => pwd,
        None => prompt
            .secret(OLD_PASSWORD_PROMPT)
            .context("cannot read old admin password")?,
    };
    let new_password = match new_password {
        Some(pwd) => pwd,
        None => prompt
            .secret(NEW_PASSWORD_PROMPT)
            .context("cannot read new admin password")?,
    };
    Ok(Credentials::new(user, old_password, new_password)?)
}
