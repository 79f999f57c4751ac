//! Wikipedia summaries via the MediaWiki action API.
//!
//! A lookup is two requests:
//!
//! 1. `list=search` resolves the spoken topic to an article title, following
//!    the search suggestion when the literal topic has no hits.
//! 2. `prop=extracts|pageprops` fetches the plain-text intro limited to the
//!    requested number of sentences.
//!
//! Disambiguation pages are reported as [`KnowledgeError::Ambiguous`] with the
//! article titles they link to.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::cache::{CacheKey, SummaryCache};
use crate::config::KnowledgeConfig;
use crate::error::{KnowledgeError, Result};
use crate::http::{build_client, classify};
use crate::source::KnowledgeSource;

/// The extracts API refuses more than ten sentences.
const MAX_EXTRACT_SENTENCES: usize = 10;

/// Wikipedia-backed [`KnowledgeSource`].
#[derive(Debug, Clone)]
pub struct WikipediaSource {
    client: reqwest::Client,
    config: KnowledgeConfig,
    cache: SummaryCache,
}

impl WikipediaSource {
    /// Create a source from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Config`] for invalid configuration, or
    /// [`KnowledgeError::Http`] if the HTTP client cannot be built.
    pub fn new(config: KnowledgeConfig) -> Result<Self> {
        config.validate()?;
        let client = build_client(&config)?;
        let cache = SummaryCache::new(config.cache_ttl_seconds);
        Ok(Self {
            client,
            config,
            cache,
        })
    }

    /// Resolve a free-form topic to an article title.
    async fn resolve_title(&self, topic: &str) -> Result<String> {
        let found: SearchQuery = self.search(topic).await?;
        if let Some(hit) = found.search.into_iter().next() {
            return Ok(hit.title);
        }

        let suggestion = found
            .searchinfo
            .and_then(|info| info.suggestion)
            .filter(|s| !s.trim().is_empty());
        if let Some(suggestion) = suggestion {
            debug!("no hits, retrying with search suggestion");
            let retried: SearchQuery = self.search(&suggestion).await?;
            if let Some(hit) = retried.search.into_iter().next() {
                return Ok(hit.title);
            }
        }

        Err(KnowledgeError::NotFound(topic.to_owned()))
    }

    async fn search(&self, text: &str) -> Result<SearchQuery> {
        self.query(&[
            ("list", "search".into()),
            ("srsearch", text.to_owned()),
            ("srlimit", "1".into()),
            ("srinfo", "suggestion".into()),
            ("srprop", String::new()),
        ])
        .await
    }

    /// Fetch the intro extract of `title`.
    async fn fetch_extract(&self, topic: &str, title: &str, sentences: usize) -> Result<String> {
        let found: PagesQuery = self
            .query(&[
                ("prop", "extracts|pageprops".into()),
                ("ppprop", "disambiguation".into()),
                ("exintro", "1".into()),
                ("explaintext", "1".into()),
                ("exsentences", sentences.to_string()),
                ("redirects", "1".into()),
                ("titles", title.to_owned()),
            ])
            .await?;

        let page = found
            .pages
            .into_iter()
            .next()
            .ok_or_else(|| KnowledgeError::Parse("response contained no pages".into()))?;

        if page.missing || page.invalid {
            return Err(KnowledgeError::NotFound(topic.to_owned()));
        }

        if page.is_disambiguation() {
            let options = self.disambiguation_options(&page.title).await?;
            return Err(KnowledgeError::Ambiguous {
                topic: topic.to_owned(),
                options,
            });
        }

        let extract = page.extract.unwrap_or_default();
        let extract = extract.trim();
        if extract.is_empty() {
            return Err(KnowledgeError::NotFound(topic.to_owned()));
        }
        Ok(extract.to_owned())
    }

    /// Article titles linked from a disambiguation page.
    async fn disambiguation_options(&self, title: &str) -> Result<Vec<String>> {
        let found: PagesQuery = self
            .query(&[
                ("prop", "links".into()),
                ("plnamespace", "0".into()),
                ("pllimit", "max".into()),
                ("titles", title.to_owned()),
            ])
            .await?;

        let options = found
            .pages
            .into_iter()
            .flat_map(|page| page.links)
            .map(|link| link.title)
            .filter(|t| !t.contains("(disambiguation)"))
            .take(self.config.max_options)
            .collect();
        Ok(options)
    }

    /// Issue one API request and unwrap the `query` payload.
    async fn query<T: DeserializeOwned>(&self, params: &[(&str, String)]) -> Result<T> {
        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(KnowledgeError::Http(format!(
                "{} returned status {status}",
                self.config.api_url
            )));
        }

        let envelope: Envelope<T> = response.json().await.map_err(classify)?;
        if let Some(error) = envelope.error {
            return Err(KnowledgeError::Http(format!(
                "API error {}: {}",
                error.code, error.info
            )));
        }
        envelope
            .query
            .ok_or_else(|| KnowledgeError::Parse("response has no query payload".into()))
    }
}

#[async_trait]
impl KnowledgeSource for WikipediaSource {
    async fn summarize(&self, topic: &str, max_sentences: usize) -> Result<String> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(KnowledgeError::NotFound(String::new()));
        }
        let sentences = max_sentences.clamp(1, MAX_EXTRACT_SENTENCES);

        let key = CacheKey::new(topic, sentences);
        if let Some(cached) = self.cache.get(&key).await {
            trace!(topic, "summary cache hit");
            return Ok(cached);
        }

        trace!(topic, sentences, "looking up summary");
        let title = self.resolve_title(topic).await?;
        let summary = self.fetch_extract(topic, &title, sentences).await?;
        self.cache.insert(key, summary.clone()).await;
        Ok(summary)
    }

    fn name(&self) -> &str {
        "Wikipedia"
    }
}

// ── Wire types (formatversion=2) ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    query: Option<T>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchQuery {
    searchinfo: Option<SearchInfo>,
    search: Vec<SearchHit>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchInfo {
    suggestion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PagesQuery {
    pages: Vec<Page>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Page {
    title: String,
    missing: bool,
    invalid: bool,
    extract: Option<String>,
    pageprops: Option<PageProps>,
    links: Vec<Link>,
}

impl Page {
    fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageProps {
    disambiguation: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Link {
    title: String,
}
