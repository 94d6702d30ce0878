//! Run configuration: where the solver lives.

/// Base URL used when none is given on the command line.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";

/// Endpoint used when none is given on the command line.
pub const DEFAULT_ENDPOINT: &str = "deutsch-classical";

/// Immutable target configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub base_url: String,
    pub endpoint: String,
}

impl HarnessConfig {
    pub fn new(base_url: impl Into<String>, endpoint: impl Into<String>) -> Self {
        HarnessConfig {
            base_url: base_url.into(),
            endpoint: endpoint.into(),
        }
    }

    /// `{base_url}/{endpoint}`, joined with exactly one slash.
    pub fn target_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig::new(DEFAULT_BASE_URL, DEFAULT_ENDPOINT)
    }
}
