//! Emit an `env http_proxy=...` command prefix from proxy host/port settings.

pub mod cli;
pub mod config;
pub mod logging;
pub mod prefix;
