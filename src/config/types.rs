use serde::{Deserialize, Deserializer};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub proxy: ProxyConfig,
}

/// Forward proxy settings used to build the env prefix.
///
/// Both values are plain strings and are never validated as a hostname
/// or port number. Empty means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProxyConfig {
    /// Proxy host (e.g., "1.2.3.4", "proxy.example.com").
    #[serde(default)]
    pub host: String,
    /// Proxy port. Accepts a TOML string or integer.
    #[serde(default, deserialize_with = "deserialize_port")]
    pub port: String,
    /// Which variable names receive the proxy URL.
    #[serde(default, rename = "vars")]
    pub var_set: VarSet,
}

impl ProxyConfig {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            var_set: VarSet::default(),
        }
    }

    pub fn with_var_set(mut self, var_set: VarSet) -> Self {
        self.var_set = var_set;
        self
    }

    /// True only when both host and port are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.host.is_empty() && !self.port.is_empty()
    }
}

/// Set of environment variable names assigned in the prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarSet {
    /// `http_proxy`, `https_proxy`, `HTTP_PROXY`.
    #[default]
    Classic,
    /// Classic plus `HTTPS_PROXY`.
    Extended,
}

impl VarSet {
    /// Variable names in emission order.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            VarSet::Classic => &["http_proxy", "https_proxy", "HTTP_PROXY"],
            VarSet::Extended => &["http_proxy", "https_proxy", "HTTP_PROXY", "HTTPS_PROXY"],
        }
    }
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPort {
        Text(String),
        Number(u64),
    }

    Ok(match RawPort::deserialize(deserializer)? {
        RawPort::Text(s) => s,
        RawPort::Number(n) => n.to_string(),
    })
}
