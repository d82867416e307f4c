//! Prefix builder — turns a resolved [`ProxyConfig`] into the output line.

use std::fmt;

use crate::config::{ProxyConfig, VarSet};
use crate::prefix::env_set::EnvSet;

/// Emitted when no proxy is configured. Never empty, so a caller that
/// splices it in front of a command still gets valid shell.
pub const UNCONFIGURED_OUTPUT: &str = " ";

/// Decision taken once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyState {
    /// Host or port missing.
    Unconfigured,
    /// Both present; `url` is `http://<host>:<port>/`.
    Configured { url: String, var_set: VarSet },
}

impl ProxyState {
    pub fn from_config(config: &ProxyConfig) -> Self {
        if !config.is_complete() {
            return ProxyState::Unconfigured;
        }
        ProxyState::Configured {
            url: proxy_url(&config.host, &config.port),
            var_set: config.var_set,
        }
    }
}

/// `http://<host>:<port>/`, no validation.
pub fn proxy_url(host: &str, port: &str) -> String {
    format!("http://{host}:{port}/")
}

/// The single line written to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine(String);

impl OutputLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the `env NAME=value ...` prefix for a proxy config.
#[derive(Debug, Clone, Copy)]
pub struct ProxyEnvStringBuilder<'a> {
    config: &'a ProxyConfig,
}

impl<'a> ProxyEnvStringBuilder<'a> {
    pub fn new(config: &'a ProxyConfig) -> Self {
        Self { config }
    }

    pub fn state(&self) -> ProxyState {
        ProxyState::from_config(self.config)
    }

    /// Configured: `env ` + assignments + one trailing space + newline.
    /// Unconfigured: a single space, no newline.
    pub fn build(&self) -> OutputLine {
        match self.state() {
            ProxyState::Unconfigured => OutputLine(UNCONFIGURED_OUTPUT.to_string()),
            ProxyState::Configured { url, var_set } => {
                let assignments = EnvSet::new().with_proxy_url(var_set.names(), &url);
                OutputLine(format!("env {} \n", assignments.render()))
            }
        }
    }
}
