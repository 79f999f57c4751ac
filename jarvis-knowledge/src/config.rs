//! Knowledge lookup configuration with sensible defaults.
//!
//! [`KnowledgeConfig`] controls which MediaWiki endpoint is queried,
//! request timeouts, and how long summaries stay cached.

use crate::error::KnowledgeError;

/// Default English Wikipedia action API endpoint.
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Default User-Agent. Wikimedia asks clients to identify themselves.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "jarvis/",
    env!("CARGO_PKG_VERSION"),
    " (voice assistant; +https://www.mediawiki.org/wiki/API:Etiquette)"
);

/// Configuration for a [`WikipediaSource`](crate::WikipediaSource).
#[derive(Debug, Clone)]
pub struct KnowledgeConfig {
    /// MediaWiki action API endpoint (`.../w/api.php`).
    pub api_url: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// How long to cache summaries in seconds. Set to 0 to disable caching.
    pub cache_ttl_seconds: u64,
    /// Maximum number of disambiguation options collected from a page.
    pub max_options: usize,
    /// Custom User-Agent string. `None` uses [`DEFAULT_USER_AGENT`].
    pub user_agent: Option<String>,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout_seconds: 8,
            cache_ttl_seconds: 600,
            max_options: 10,
            user_agent: None,
        }
    }
}

impl KnowledgeConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `api_url` must be an http(s) URL
    /// - `timeout_seconds` must be greater than 0
    /// - `max_options` must be greater than 0
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(KnowledgeError::Config(format!(
                "api_url must be an http(s) URL, got '{url}'"
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(KnowledgeError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.max_options == 0 {
            return Err(KnowledgeError::Config(
                "max_options must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// The User-Agent header value to send.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
