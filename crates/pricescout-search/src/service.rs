//! Aggregated search orchestration.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use pricescout_core::{AppConfig, Offer};

use crate::cache::{cache_key, ResultCache};
use crate::error::SearchError;
use crate::normalize::normalize_offer;
use crate::sources::{CatalogClient, ShoppingClient};

/// Which path produced a response. `Primary`/`Fallback` report whether a
/// shopping credential was configured, matching the original browser
/// contract; a credential-present request served from the catalog after a
/// primary failure still reports `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Cache,
    Primary,
    Fallback,
}

impl std::fmt::Display for SearchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchSource::Cache => write!(f, "cache"),
            SearchSource::Primary => write!(f, "primary"),
            SearchSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Result of one aggregated search: the source indicator plus the offers,
/// sorted ascending by price.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub source: SearchSource,
    pub results: Vec<Offer>,
}

/// Orchestrates one search across cache, primary source, and fallback.
pub struct SearchService {
    primary: Option<ShoppingClient>,
    fallback: CatalogClient,
    cache: ResultCache,
}

impl SearchService {
    #[must_use]
    pub fn new(primary: Option<ShoppingClient>, fallback: CatalogClient, cache: ResultCache) -> Self {
        Self {
            primary,
            fallback,
            cache,
        }
    }

    /// Builds the service from application configuration. The primary client
    /// exists only when a shopping credential was resolved.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if a client cannot be constructed from the
    /// configured URLs.
    pub fn from_config(config: &AppConfig) -> Result<Self, SearchError> {
        let primary = config
            .shopping_api_key
            .as_deref()
            .map(|key| {
                ShoppingClient::with_base_url(
                    key,
                    config.request_timeout_secs,
                    &config.user_agent,
                    &config.shopping_base_url,
                )
            })
            .transpose()?;
        let fallback = CatalogClient::with_base_url(
            config.request_timeout_secs,
            &config.user_agent,
            &config.catalog_base_url,
        )?;
        let cache = ResultCache::new(Duration::from_secs(config.cache_ttl_secs));

        Ok(Self::new(primary, fallback, cache))
    }

    /// Runs one aggregated search.
    ///
    /// 1. Reject queries that trim to nothing; no upstream call is made.
    /// 2. Serve a fresh cache entry when one exists.
    /// 3. With a credential configured, try the shopping source: normalize
    ///    every record, keep offers carrying both price and link, sort
    ///    ascending by price. A source failure is logged and treated as
    ///    zero results, never aborting the request.
    /// 4. When the primary path produced nothing, serve the catalog
    ///    fallback, sorted the same way. Catalog failures propagate.
    /// 5. Cache whatever was served, even an empty list, so queries with
    ///    no results do not hammer the upstream.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyQuery`] for empty/whitespace queries.
    /// - Any fallback-source failure.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let key = cache_key(query);
        if let Some(results) = self.cache.get(&key).await {
            tracing::debug!(query, results = results.len(), "serving cached results");
            return Ok(SearchOutcome {
                source: SearchSource::Cache,
                results,
            });
        }

        let mut results = match &self.primary {
            Some(primary) => match primary.search(query).await {
                Ok(raw_items) => usable_offers(&raw_items),
                Err(e) => {
                    tracing::warn!(query, error = %e, "primary search failed; falling back to catalog");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if results.is_empty() {
            results = self.fallback.search(query).await?;
            sort_by_price(&mut results);
        }

        self.cache.set(&key, results.clone()).await;

        let source = if self.primary.is_some() {
            SearchSource::Primary
        } else {
            SearchSource::Fallback
        };
        tracing::info!(query, %source, results = results.len(), "search completed");

        Ok(SearchOutcome { source, results })
    }
}

/// Normalizes raw primary records and keeps only offers carrying both a
/// price and a link, sorted ascending by price.
fn usable_offers(raw_items: &[Value]) -> Vec<Offer> {
    let mut offers: Vec<Offer> = raw_items
        .iter()
        .map(normalize_offer)
        .filter(|offer| offer.price.is_some() && offer.link.is_some())
        .collect();
    sort_by_price(&mut offers);
    offers
}

/// Ascending stable sort by price; offers with equal prices keep their input
/// order. Priceless offers sort last (the primary filter removes them, and
/// the catalog never produces them).
fn sort_by_price(offers: &mut [Offer]) {
    offers.sort_by(|a, b| match (a.price, b.price) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
