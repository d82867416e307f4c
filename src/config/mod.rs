//! Configuration for the proxy prefix.

mod loader;
mod resolve;
mod types;

pub use loader::ConfigError;
pub use resolve::{
    config_file_path, load_file_layer, resolve, Overrides, CONFIG_ENV, HOST_ENV, PORT_ENV,
};
pub use types::{Config, ProxyConfig, VarSet};
