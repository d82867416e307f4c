//! Env-prefix construction.
//!
//! ```text
//! ProxyConfig → ProxyState → EnvSet → OutputLine
//! ```
//!
//! Every stage is pure; only the CLI touches stdout.

mod builder;
mod env_set;

pub use builder::{proxy_url, OutputLine, ProxyEnvStringBuilder, ProxyState, UNCONFIGURED_OUTPUT};
pub use env_set::EnvSet;

use crate::config::ProxyConfig;

/// Shorthand for `ProxyEnvStringBuilder::new(config).build()`.
pub fn build_prefix(config: &ProxyConfig) -> OutputLine {
    ProxyEnvStringBuilder::new(config).build()
}
