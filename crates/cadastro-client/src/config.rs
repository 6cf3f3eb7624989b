//! Document store client configuration.
//!
//! Configures the base URL and document path roots for the hosted store.
//! Defaults point to the production endpoint. Override via environment
//! variables or explicit construction for staging/testing.

use url::Url;

/// Configuration for connecting to the document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store's REST surface.
    /// Default: <https://firestore.googleapis.com>
    pub base_url: Url,
    /// Project the documents live under.
    pub project_id: String,
    /// Database within the project. Default: `(default)`.
    pub database_id: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CADASTRO_STORE_URL` (default: `https://firestore.googleapis.com`)
    /// - `CADASTRO_PROJECT_ID` (required)
    /// - `CADASTRO_DATABASE_ID` (default: `(default)`)
    /// - `CADASTRO_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_id =
            std::env::var("CADASTRO_PROJECT_ID").map_err(|_| ConfigError::MissingProjectId)?;

        Ok(Self {
            base_url: env_url("CADASTRO_STORE_URL", "https://firestore.googleapis.com")?,
            project_id,
            database_id: std::env::var("CADASTRO_DATABASE_ID")
                .unwrap_or_else(|_| "(default)".to_string()),
            timeout_secs: std::env::var("CADASTRO_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` cannot be parsed.
    pub fn local_mock(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)
                .map_err(|e| ConfigError::InvalidUrl("local_mock".to_string(), e.to_string()))?,
            project_id: "test-project".to_string(),
            database_id: "(default)".to_string(),
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CADASTRO_PROJECT_ID environment variable is required")]
    MissingProjectId,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = StoreConfig::local_mock("http://127.0.0.1:9000").unwrap();
        assert_eq!(cfg.project_id, "test-project");
        assert_eq!(cfg.database_id, "(default)");
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn local_mock_rejects_invalid_url() {
        assert!(StoreConfig::local_mock("not a url").is_err());
    }

    #[test]
    fn env_url_uses_default_when_var_absent() {
        let url = env_url("NONEXISTENT_VAR_12345", "https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn env_url_rejects_invalid_url() {
        // Temporarily set an invalid URL.
        std::env::set_var("TEST_BAD_URL_CC", "not a url");
        let result = env_url("TEST_BAD_URL_CC", "https://example.com");
        std::env::remove_var("TEST_BAD_URL_CC");
        assert!(result.is_err());
    }
}
