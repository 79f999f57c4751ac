//! Shared HTTP client for knowledge service requests.

use crate::config::KnowledgeConfig;
use crate::error::KnowledgeError;
use std::time::Duration;

/// Build a [`reqwest::Client`] configured for MediaWiki API requests.
///
/// The client has:
/// - Timeout from config
/// - The configured (or default descriptive) User-Agent
/// - gzip decompression
///
/// # Errors
///
/// Returns [`KnowledgeError::Http`] if the client cannot be constructed.
pub fn build_client(config: &KnowledgeConfig) -> Result<reqwest::Client, KnowledgeError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent().to_owned())
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| KnowledgeError::Http(format!("failed to build HTTP client: {e}")))
}

/// Map a transport-level failure to a [`KnowledgeError`].
pub(crate) fn classify(err: reqwest::Error) -> KnowledgeError {
    if err.is_timeout() {
        KnowledgeError::Timeout(err.to_string())
    } else if err.is_decode() {
        KnowledgeError::Parse(err.to_string())
    } else {
        KnowledgeError::Http(err.to_string())
    }
}
