//! Rotate command — change the admin password on every configured server.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{HttpClient, SecretPrompt};
use crate::application::services::credentials::resolve_credentials;
use crate::application::services::rotation::change_all;
use crate::domain::credentials::DEFAULT_USER;
use crate::domain::target::{DEFAULT_PORT, build_targets};
use crate::domain::{CqVersion, FileConfig, RunConfig, RunReport};
use crate::output::{TerminalReporter, json};

/// Arguments for a rotation run.
#[derive(Args, Default)]
pub struct RotateArgs {
    /// CQ5 version of the servers
    #[arg(
        short = 'c',
        long = "cqversion",
        value_enum,
        default_value_t = CqVersion::V5_4
    )]
    pub cq_version: CqVersion,

    /// Admin user whose password changes [default: admin]
    #[arg(short, long, env = "CQ5_USER")]
    pub user: Option<String>,

    /// Old CQ5 admin password (prompted for when missing)
    #[arg(short, long = "oldpwd", env = "CQ5_OLD_PASSWORD", hide_env_values = true)]
    pub old_password: Option<String>,

    /// New CQ5 admin password (prompted for when missing)
    #[arg(short, long = "newpwd", env = "CQ5_NEW_PASSWORD", hide_env_values = true)]
    pub new_password: Option<String>,

    /// Port for servers given without one [default: 4502]
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Server to change passwords on, with optional port. Repeatable,
    /// e.g. -s foo.lan:4509 -s bar.net [default: localhost]
    #[arg(short = 's', long = "server", value_name = "HOST[:PORT]")]
    pub servers: Vec<String>,

    /// Per-request timeout in seconds (waits indefinitely when unset)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Config file with defaults for user, port, servers and timeout
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log each request
    #[arg(short, long)]
    pub verbose: bool,
}

/// Merge flags, environment and config file into the run configuration,
/// prompting for any missing password.
///
/// Precedence: flag, environment variable, config file, built-in default.
///
/// # Errors
///
/// Returns an error if the version is unsupported, a server is malformed, or
/// credentials cannot be obtained. The version is checked first so an
/// unsupported release never prompts.
pub fn resolve_config(
    args: RotateArgs,
    file: FileConfig,
    prompt: &impl SecretPrompt,
) -> Result<RunConfig> {
    args.cq_version.ensure_supported()?;

    let port = args.port.or(file.port).unwrap_or(DEFAULT_PORT);
    let servers = if args.servers.is_empty() {
        file.servers
    } else {
        args.servers
    };
    let targets = build_targets(&servers, port)?;
    let timeout = args.timeout.or(file.timeout_secs).map(Duration::from_secs);

    let user = args
        .user
        .or(file.user)
        .unwrap_or_else(|| DEFAULT_USER.to_string());
    let credentials = resolve_credentials(&user, args.old_password, args.new_password, prompt)?;

    tracing::debug!(
        version = %args.cq_version,
        user = credentials.username(),
        targets = targets.len(),
        ?timeout,
        "resolved run configuration"
    );

    Ok(RunConfig {
        credentials,
        targets,
        timeout,
    })
}

/// Run every target and render the report.
///
/// Remote failures are reported, never returned as errors.
///
/// # Errors
///
/// Returns an error only if the report cannot be rendered.
pub fn execute(
    app: &AppContext,
    config: &RunConfig,
    client: &impl HttpClient,
) -> Result<RunReport> {
    let reporter = TerminalReporter::new(&app.output);
    let report = change_all(client, &config.targets, &config.credentials, &reporter);

    if app.is_json() {
        println!("{}", json::format_report(&report).context("cannot render report")?);
    } else {
        app.renderer().render_report(&report);
    }
    Ok(report)
}
