//! Domain types for run configuration.
//!
//! Pure types only — loading the file lives in `crate::infra::config`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::credentials::Credentials;
use crate::domain::target::Target;

// ── Config file schema ───────────────────────────────────────────────────────

/// Optional defaults stored in `~/.cq5-passwd/config.yaml`.
///
/// Passwords are deliberately not part of the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Admin user name.
    pub user: Option<String>,
    /// Default port for servers given without one.
    pub port: Option<u16>,
    /// Servers as `host[:port]`, used when none are given on the command line.
    pub servers: Vec<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

// ── Resolved run configuration ───────────────────────────────────────────────

/// Everything a run needs, resolved once before any network activity and
/// passed explicitly to every step.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub credentials: Credentials,
    pub targets: Vec<Target>,
    /// `None` blocks until the server answers.
    pub timeout: Option<Duration>,
}
