//! Trait definition for pluggable knowledge backends.
//!
//! The assistant only depends on [`KnowledgeSource`], so the Wikipedia client
//! can be replaced by a test double or another encyclopedia.

use async_trait::async_trait;

use crate::error::Result;

/// A source of short topic summaries.
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// behind an `Arc` for the lifetime of a session.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Summarise `topic` in at most `max_sentences` sentences.
    ///
    /// # Errors
    ///
    /// - [`KnowledgeError::Ambiguous`](crate::KnowledgeError::Ambiguous) when
    ///   the topic matches several articles.
    /// - [`KnowledgeError::NotFound`](crate::KnowledgeError::NotFound) when no
    ///   article matches.
    /// - Any other variant for transport or service failures.
    async fn summarize(&self, topic: &str, max_sentences: usize) -> Result<String>;

    /// Human-readable name of the source, e.g. `"Wikipedia"`.
    fn name(&self) -> &str;
}
