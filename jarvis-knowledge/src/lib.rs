//! # jarvis-knowledge
//!
//! Short encyclopedia summaries for the jarvis voice assistant.
//!
//! The assistant answers "wikipedia <topic>" requests with the first few
//! sentences of the matching article. This crate owns that lookup:
//!
//! - [`KnowledgeSource`] is the seam the assistant depends on
//! - [`WikipediaSource`] implements it against the MediaWiki action API
//! - Ambiguous topics and missing pages are structured errors, not strings,
//!   so the caller can phrase its own spoken answer
//! - Successful summaries are cached in memory with a configurable TTL
//!
//! Topics are logged only at trace level.

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod source;
pub mod wikipedia;

pub use config::KnowledgeConfig;
pub use error::{KnowledgeError, Result};
pub use source::KnowledgeSource;
pub use wikipedia::WikipediaSource;

/// Summarise `topic` from Wikipedia with default configuration.
///
/// Convenience wrapper that builds a one-off [`WikipediaSource`]. Long-lived
/// callers should keep a source around so its cache is reused.
///
/// # Errors
///
/// Same as [`KnowledgeSource::summarize`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> jarvis_knowledge::Result<()> {
/// let summary = jarvis_knowledge::summarize_default("Ada Lovelace", 3).await?;
/// println!("{summary}");
/// # Ok(())
/// # }
/// ```
pub async fn summarize_default(topic: &str, max_sentences: usize) -> Result<String> {
    WikipediaSource::new(KnowledgeConfig::default())?
        .summarize(topic, max_sentences)
        .await
}
