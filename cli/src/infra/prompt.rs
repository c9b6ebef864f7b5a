//! Terminal implementation of the `SecretPrompt` port.

use anyhow::{Context, Result};

use crate::application::ports::SecretPrompt;

/// Masked terminal prompt backed by `dialoguer::Password`.
pub struct TerminalPrompt;

impl SecretPrompt for TerminalPrompt {
    fn secret(&self, prompt: &str) -> Result<String> {
        dialoguer::Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .context("no terminal available for password input; pass it via flag or environment")
    }
}
