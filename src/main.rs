use std::io;

use clap::Parser;
use proxyenv::cli::{run, Cli};
use proxyenv::logging::init_tracing;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Exit status is always 0; failures only reach the log.
    if let Err(err) = run(&cli, &mut out) {
        tracing::warn!("failed to emit prefix: {err:#}");
    }
}
