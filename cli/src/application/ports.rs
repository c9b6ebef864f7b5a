//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use anyhow::Result;

use crate::domain::HttpError;

// ── Value Types ───────────────────────────────────────────────────────────────

/// HTTP Basic credentials for one request.
#[derive(Clone, Copy)]
pub struct BasicAuth<'a> {
    pub user: &'a str,
    pub password: &'a str,
}

/// Status and body of an answered request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

// ── HTTP Port ─────────────────────────────────────────────────────────────────

/// Authenticated form posts against a CQ instance.
///
/// Implementations must not retry.
pub trait HttpClient {
    /// POST with an empty body and return the response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Status`] for a non-2xx answer, otherwise a
    /// transport error.
    fn fetch(&self, url: &str, auth: BasicAuth<'_>) -> Result<String, HttpError>;

    /// POST `form` as `application/x-www-form-urlencoded`.
    ///
    /// Any answered status is returned as a response.
    ///
    /// # Errors
    ///
    /// Returns an error only when no answer was received.
    fn request(
        &self,
        url: &str,
        auth: BasicAuth<'_>,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, HttpError>;
}

// ── Secret Prompt Port ────────────────────────────────────────────────────────

/// Source of secrets not given on the command line or in the environment.
pub trait SecretPrompt {
    /// Ask for a secret without echoing it.
    ///
    /// # Errors
    ///
    /// Returns an error if no secret can be obtained (e.g. no TTY).
    fn secret(&self, prompt: &str) -> Result<String>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit an error message. Never suppressed.
    fn error(&self, message: &str);
}
