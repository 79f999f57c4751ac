//! In-memory cache for topic summaries.
//!
//! Keyed by the (lowercased topic, sentence count) pair. Uses [`moka`] for
//! async-friendly caching with a TTL and automatic eviction. Only successful
//! summaries are cached; ambiguity and not-found outcomes are always re-queried.

use std::time::Duration;

use moka::future::Cache;

/// Maximum number of cached summaries.
const MAX_CACHE_ENTRIES: u64 = 256;

/// Composite cache key: normalised topic + requested sentence count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    topic: String,
    sentences: usize,
}

impl CacheKey {
    /// Build a deterministic cache key.
    ///
    /// The topic is lowercased, trimmed and whitespace-collapsed so that
    /// "Albert  Einstein " and "albert einstein" share an entry.
    pub fn new(topic: &str, sentences: usize) -> Self {
        let topic = topic
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        Self { topic, sentences }
    }
}

/// Summary cache owned by a knowledge source. A TTL of zero disables it.
#[derive(Clone)]
pub struct SummaryCache {
    inner: Option<Cache<CacheKey, String>>,
}

impl SummaryCache {
    /// Create a cache whose entries expire after `ttl_seconds`.
    pub fn new(ttl_seconds: u64) -> Self {
        let inner = (ttl_seconds > 0).then(|| {
            Cache::builder()
                .max_capacity(MAX_CACHE_ENTRIES)
                .time_to_live(Duration::from_secs(ttl_seconds))
                .build()
        });
        Self { inner }
    }

    /// Look up a cached summary. Always `None` when caching is disabled.
    pub async fn get(&self, key: &CacheKey) -> Option<String> {
        match self.inner {
            Some(ref cache) => cache.get(key).await,
            None => None,
        }
    }

    /// Insert a summary. No-op when caching is disabled.
    pub async fn insert(&self, key: CacheKey, summary: String) {
        if let Some(ref cache) = self.inner {
            cache.insert(key, summary).await;
        }
    }
}

impl std::fmt::Debug for SummaryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryCache")
            .field("enabled", &self.inner.is_some())
            .finish()
    }
}
