//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `ureq`, `std::fs`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.
//!
//! SECURITY: messages never carry passwords.

use thiserror::Error;

// ── Target errors ─────────────────────────────────────────────────────────────

/// Errors raised while turning `host[:port]` strings into targets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("Invalid server '{0}': host name is empty.")]
    EmptyHost(String),

    #[error("Invalid server '{spec}': '{port}' is not a port number (1-65535).")]
    InvalidPort { spec: String, port: String },

    #[error("Invalid server '{0}': IPv6 address is missing its closing ']'.")]
    UnclosedBracket(String),
}

// ── Credential errors ─────────────────────────────────────────────────────────

/// Errors raised while assembling the run credentials.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Admin user name must not be empty.")]
    EmptyUsername,

    #[error("New password must not be empty.")]
    EmptyNewPassword,
}

// ── Version errors ────────────────────────────────────────────────────────────

/// Errors related to the targeted CQ release.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("CQ {0} is not supported yet. Only CQ 5.4 can be updated.")]
    Unsupported(String),
}

// ── HTTP errors ───────────────────────────────────────────────────────────────

/// Failures of a single HTTP exchange.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// The host could not be reached at all (refused, DNS, no route).
    #[error("cannot connect to {url}: {reason}")]
    Unreachable { url: String, reason: String },

    /// The server answered with a non-success status where a body was required.
    #[error("HTTP {code} from {url}")]
    Status { url: String, code: u16 },

    /// Any other transport failure (timeout, broken connection, bad URL).
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

impl HttpError {
    /// Whether this failure means the host is unreachable.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

// ── Step errors ───────────────────────────────────────────────────────────────

/// Failures of one password-change step.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("configuration listing is not valid JSON: {0}")]
    InvalidListing(String),

    #[error("configuration listing for {factory_pid} is empty")]
    NoConfiguration { factory_pid: String },

    #[error("first configuration entry for {factory_pid} has no pid")]
    MissingPid { factory_pid: String },
}

impl StepError {
    /// Whether this failure means the host is unreachable.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_unreachable())
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to the optional configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Cannot parse config file {path}: {reason}")]
    Malformed { path: String, reason: String },
}
