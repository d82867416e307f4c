//! Layered resolution: config file, then environment, then command line.
//!
//! A higher layer only wins when its value is non-empty, so an empty
//! `PROXYHOST=` never erases a host set in the config file. The file layer
//! exists only when `--config` or `PROXYENV_CONFIG` names one; a plain run
//! reads nothing but `PROXYHOST`/`PROXYPORT`.

use std::path::{Path, PathBuf};

use crate::config::types::{Config, ProxyConfig, VarSet};

/// Environment variable holding the proxy host.
pub const HOST_ENV: &str = "PROXYHOST";
/// Environment variable holding the proxy port.
pub const PORT_ENV: &str = "PROXYPORT";
/// Environment variable pointing at an alternate config file.
pub const CONFIG_ENV: &str = "PROXYENV_CONFIG";

/// Partial proxy settings contributed by one layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<String>,
    pub var_set: Option<VarSet>,
}

impl Overrides {
    /// Read `PROXYHOST` / `PROXYPORT` through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup(HOST_ENV),
            port: lookup(PORT_ENV),
            var_set: None,
        }
    }
}

impl ProxyConfig {
    /// Apply one layer on top of this config. Empty values are ignored.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(host) = non_empty(overrides.host.as_deref()) {
            self.host = host.to_string();
        }
        if let Some(port) = non_empty(overrides.port.as_deref()) {
            self.port = port.to_string();
        }
        if let Some(var_set) = overrides.var_set {
            self.var_set = var_set;
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Config file named by `--config`, else by `PROXYENV_CONFIG`.
///
/// `None` means no file layer at all; there is no default location.
pub fn config_file_path<F>(cli_path: Option<&Path>, lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }
    non_empty(lookup(CONFIG_ENV).as_deref()).map(PathBuf::from)
}

/// Load the file layer, degrading to an empty config on any error.
pub fn load_file_layer(path: Option<&Path>) -> ProxyConfig {
    let Some(path) = path else {
        tracing::debug!("no config file requested, skipping file layer");
        return ProxyConfig::default();
    };

    match Config::load_from(path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "applied config file layer");
            config.proxy
        }
        Err(err) => {
            tracing::warn!(error = %err, "ignoring config file");
            ProxyConfig::default()
        }
    }
}

/// Fold file, environment and command-line layers into one config.
pub fn resolve(file: ProxyConfig, env: &Overrides, cli: &Overrides) -> ProxyConfig {
    let mut config = file;
    config.apply(env);
    tracing::debug!(layer = "env", "applied overrides");
    config.apply(cli);
    tracing::debug!(layer = "cli", "applied overrides");
    config
}
