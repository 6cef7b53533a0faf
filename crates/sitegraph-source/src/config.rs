//! Sourcing configuration
//!
//! The host build process hands the library one [`SourceConfig`]; nothing in
//! it is mutated after the run starts.

use sitegraph_common::{Result, SitegraphError};

/// Default timeout for backend requests in seconds.
/// Can be overridden via the SITEGRAPH_TIMEOUT_SECS environment variable.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for one sourcing run
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Application identifier sent with every backend request
    pub app_id: String,

    /// Master access credential sent with every backend request
    pub master_key: String,

    /// Base URL of the backend server (e.g. "https://cms.example.com/parse")
    pub server_url: String,

    /// Identifier of the site whose models are sourced
    pub site_id: String,

    /// Prefix prepended to model names when deriving external type names
    pub type_prefix: String,

    /// Timeout applied to each backend request
    pub timeout_secs: u64,
}

impl SourceConfig {
    /// Create a new configuration with the default request timeout
    pub fn new(
        app_id: impl Into<String>,
        master_key: impl Into<String>,
        server_url: impl Into<String>,
        site_id: impl Into<String>,
        type_prefix: impl Into<String>,
    ) -> Self {
        let timeout_secs = std::env::var("SITEGRAPH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            app_id: app_id.into(),
            master_key: master_key.into(),
            server_url: server_url.into(),
            site_id: site_id.into(),
            type_prefix: type_prefix.into(),
            timeout_secs,
        }
    }

    /// Create from environment variables
    ///
    /// Reads SITEGRAPH_APP_ID, SITEGRAPH_MASTER_KEY, SITEGRAPH_SERVER_URL,
    /// SITEGRAPH_SITE_ID and SITEGRAPH_TYPE_PREFIX.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            require_env("SITEGRAPH_APP_ID")?,
            require_env("SITEGRAPH_MASTER_KEY")?,
            require_env("SITEGRAPH_SERVER_URL")?,
            require_env("SITEGRAPH_SITE_ID")?,
            require_env("SITEGRAPH_TYPE_PREFIX")?,
        ))
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| SitegraphError::config(format!("{} is not set", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_defaults_timeout() {
        let config = SourceConfig::new("app", "key", "http://localhost:1337/parse", "site1", "Blog");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.type_prefix, "Blog");
    }

    #[test]
    fn test_from_env_missing_var() {
        std::env::remove_var("SITEGRAPH_APP_ID");
        let result = SourceConfig::from_env();
        assert!(matches!(result, Err(SitegraphError::Config(_))));
    }
}
