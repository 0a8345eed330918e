//! Public configuration for the GitHub gateway.

use std::time::Duration;

/// Default GitHub REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";

/// Configuration for [`crate::ReqwestGateway`].
///
/// # Example
///
/// ```
/// use ghscope_github::GithubClientConfig;
/// use std::time::Duration;
///
/// let config = GithubClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct GithubClientConfig {
    /// Base URL for the GitHub REST API
    pub(crate) base_url: String,
    /// User agent string; GitHub rejects requests without one
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for GithubClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("ghscope/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl GithubClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the API.
    ///
    /// Defaults to `https://api.github.com/`. Useful for GitHub Enterprise
    /// hosts and local test servers.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Configured request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GithubClientConfig::new();
        assert_eq!(config.base_url(), "https://api.github.com/");
        assert!(config.user_agent().starts_with("ghscope/"));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GithubClientConfig::new()
            .with_base_url("https://github.example.com/api/v3")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url(), "https://github.example.com/api/v3");
        assert_eq!(config.user_agent(), "test-agent");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }
}
