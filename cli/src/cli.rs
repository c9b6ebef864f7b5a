//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::{AppContext, OutputFlags};
use crate::commands::rotate::{self, RotateArgs};
use crate::infra::{TerminalPrompt, UreqClient, YamlConfigStore};
use crate::output::json;

/// Rotate the CQ5 admin password on CRX, the OSGi console and the servlet engine
#[derive(Parser)]
#[command(name = "cq5-passwd", version)]
pub struct Cli {
    #[command(flatten)]
    pub args: RotateArgs,

    /// Output the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

impl Cli {
    /// Execute the password rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the run cannot start: unsupported version, bad
    /// configuration or server list, or missing credentials. Remote
    /// failures are reported but do not make the run fail.
    pub fn run(self) -> Result<()> {
        let Cli {
            args,
            json,
            quiet,
            no_color,
        } = self;
        let app = AppContext::new(&OutputFlags {
            no_color,
            quiet,
            json,
        });

        let result = Self::rotate(&app, args);
        if json && let Err(e) = &result {
            println!("{}", json::format_error(&format!("{e:#}"))?);
        }
        result
    }

    fn rotate(app: &AppContext, args: RotateArgs) -> Result<()> {
        args.cq_version.ensure_supported()?;
        let file = YamlConfigStore::locate(args.config.clone()).load()?;
        let config = rotate::resolve_config(args, file, &TerminalPrompt)?;
        let client = UreqClient::new(config.timeout);
        rotate::execute(app, &config, &client)?;
        Ok(())
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` wins; otherwise `--verbose` enables debug logs for this crate.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Filter used when `RUST_LOG` is unset. Step warnings already reach the
/// terminal through the reporter, so only errors are logged by default.
#[must_use]
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "cq5_passwd=debug"
    } else {
        "cq5_passwd=error"
    }
}
