//! Command-line entry: resolve config layers and write the prefix line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{config_file_path, load_file_layer, resolve, Overrides, ProxyConfig, VarSet};
use crate::prefix::{OutputLine, ProxyEnvStringBuilder, ProxyState};

/// Print an `env http_proxy=... ` prefix for installer commands.
#[derive(Parser, Debug)]
#[command(name = "proxyenv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Proxy host (overrides PROXYHOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Proxy port (overrides PROXYPORT)
    #[arg(long)]
    pub port: Option<String>,

    /// Also assign HTTPS_PROXY
    #[arg(long)]
    pub extended: bool,

    /// Config file (overrides PROXYENV_CONFIG; no file is read otherwise)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Command-line layer. `--extended` only ever turns the extended set on.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port.clone(),
            var_set: self.extended.then_some(VarSet::Extended),
        }
    }
}

/// Resolve file → environment → command line using `lookup` for env vars.
pub fn resolve_config<F>(cli: &Cli, lookup: F) -> ProxyConfig
where
    F: Fn(&str) -> Option<String>,
{
    let path = config_file_path(cli.config.as_deref(), &lookup);
    let file = load_file_layer(path.as_deref());
    let env = Overrides::from_lookup(&lookup);
    resolve(file, &env, &cli.overrides())
}

/// Build the line for `config` and write it to `out`.
pub fn emit<W: Write>(config: &ProxyConfig, out: &mut W) -> Result<OutputLine> {
    let builder = ProxyEnvStringBuilder::new(config);
    match builder.state() {
        ProxyState::Unconfigured => tracing::info!("proxy unconfigured, emitting blank prefix"),
        ProxyState::Configured { ref url, var_set } => {
            tracing::info!(%url, ?var_set, "proxy configured")
        }
    }

    let line = builder.build();
    write!(out, "{line}").context("Failed to write prefix to stdout")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(line)
}

/// Full run against the real process environment.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<OutputLine> {
    let config = resolve_config(cli, |key| std::env::var(key).ok());
    emit(&config, out)
}
