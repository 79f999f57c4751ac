//! Error types for the jarvis-knowledge crate.
//!
//! `Ambiguous` and `NotFound` are structured outcomes the caller is expected
//! to turn into a spoken answer. The remaining variants are service failures.

/// Errors that can occur while looking up a topic summary.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    /// The topic resolves to a disambiguation page.
    #[error("'{topic}' is ambiguous ({} options)", options.len())]
    Ambiguous {
        /// The topic as requested.
        topic: String,
        /// Candidate article titles, in the order the source lists them.
        options: Vec<String>,
    },

    /// No article exists for the topic.
    #[error("no page found for '{0}'")]
    NotFound(String),

    /// The lookup did not finish in time.
    #[error("lookup timed out: {0}")]
    Timeout(String),

    /// An HTTP request to the knowledge service failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with something we could not interpret.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid knowledge configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for jarvis-knowledge results.
pub type Result<T> = std::result::Result<T, KnowledgeError>;
