//! cq5-passwd - rotate the CQ5 admin password across its subsystems

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use cq5_passwd::cli::{Cli, init_tracing};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.args.verbose);
    if let Err(e) = cli.run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
