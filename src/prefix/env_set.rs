//! Environment assignments — all prefix vars in one place.

/// Ordered list of `NAME=value` assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSet {
    vars: Vec<(String, String)>,
}

impl EnvSet {
    /// Create an empty environment set.
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Assign the same proxy URL to every name, in order.
    pub fn with_proxy_url(mut self, names: &[&str], url: &str) -> Self {
        self.vars
            .extend(names.iter().map(|name| (name.to_string(), url.to_string())));
        self
    }

    /// Render as `NAME=value ` pairs, each followed by one space.
    pub fn render(&self) -> String {
        self.vars
            .iter()
            .map(|(name, value)| format!("{name}={value} "))
            .collect()
    }
}
