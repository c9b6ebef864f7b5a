//! Target hosts — parsing of `host[:port]` server arguments.
//!
//! Pure functions only — no I/O.

use std::fmt;

use serde::Serialize;

use crate::domain::error::TargetError;

/// Port used when neither `--port` nor the config file names one.
pub const DEFAULT_PORT: u16 = 4502;

/// Host used when no server is given at all.
pub const DEFAULT_HOST: &str = "localhost";

/// One CQ instance to operate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub host: String,
    pub port: u16,
}

impl Target {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `http://host:port` without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Absolute URL for `path`, which must start with `/`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Parse one `host[:port]` argument.
///
/// A missing port falls back to `default_port`. IPv6 hosts are written in
/// brackets (`[::1]:4502`) and keep them, so they drop straight into URLs.
///
/// # Errors
///
/// Returns an error if the host part is empty, a bracket is left open, or
/// the port is not a number in `1..=65535`.
pub fn parse_target(spec: &str, default_port: u16) -> Result<Target, TargetError> {
    let spec = spec.trim();
    let (host, port) = split_host_port(spec)?;

    if host.is_empty() {
        return Err(TargetError::EmptyHost(spec.to_string()));
    }

    let port = match port {
        None => default_port,
        Some(raw) => raw
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| TargetError::InvalidPort {
                spec: spec.to_string(),
                port: raw.to_string(),
            })?,
    };

    Ok(Target::new(host, port))
}

fn split_host_port(spec: &str) -> Result<(&str, Option<&str>), TargetError> {
    if spec.starts_with('[') {
        let end = spec
            .find(']')
            .ok_or_else(|| TargetError::UnclosedBracket(spec.to_string()))?;
        let (host, rest) = spec.split_at(end + 1);
        if host == "[]" {
            return Err(TargetError::EmptyHost(spec.to_string()));
        }
        return match rest.strip_prefix(':') {
            Some(port) => Ok((host, Some(port))),
            None if rest.is_empty() => Ok((host, None)),
            None => Err(TargetError::InvalidPort {
                spec: spec.to_string(),
                port: rest.to_string(),
            }),
        };
    }
    Ok(match spec.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (spec, None),
    })
}

/// Build the target list for a run.
///
/// With no server arguments the list is exactly `localhost:<default_port>`.
///
/// # Errors
///
/// Returns the first [`TargetError`] encountered.
pub fn build_targets<S: AsRef<str>>(
    specs: &[S],
    default_port: u16,
) -> Result<Vec<Target>, TargetError> {
    if specs.is_empty() {
        return Ok(vec![Target::new(DEFAULT_HOST, default_port)]);
    }
    specs
        .iter()
        .map(|s| parse_target(s.as_ref(), default_port))
        .collect()
}
