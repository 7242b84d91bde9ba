//! Client for the fixed fallback catalog.
//!
//! The catalog listing takes no query parameters; filtering happens
//! client-side by case-insensitive title substring match. Its schema is
//! stable, so results come back already normalized. Unlike the shopping
//! source, failures here are NOT recovered: the catalog is the trusted
//! last resort and fails loudly.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use pricescout_core::Offer;

use crate::error::SearchError;

const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
const CATALOG_CURRENCY: &str = "USD";

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    products: Vec<CatalogProduct>,
}

#[derive(Debug, Deserialize, Serialize)]
struct CatalogProduct {
    id: u64,
    title: String,
    price: f64,
    thumbnail: Option<String>,
}

/// Client for the fallback catalog listing.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    listing_url: Url,
}

impl CatalogClient {
    /// Creates a client pointed at the production catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SearchError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise to a trailing slash so joins write below the base path.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| SearchError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        let listing_url = base_url
            .join("products")
            .map_err(|e| SearchError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            base_url,
            listing_url,
        })
    }

    /// Fetches the full catalog and returns the offers whose titles contain
    /// `query` (case-insensitive).
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::UpstreamStatus`] on a non-2xx response.
    /// - [`SearchError::Deserialize`] if the body does not match the catalog
    ///   shape.
    pub async fn search(&self, query: &str) -> Result<Vec<Offer>, SearchError> {
        let response = self.client.get(self.listing_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let catalog: CatalogResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: "catalog listing".to_string(),
                source: e,
            })?;

        let needle = query.trim().to_lowercase();
        Ok(catalog
            .products
            .into_iter()
            .filter(|product| product.title.to_lowercase().contains(&needle))
            .map(|product| self.to_offer(product))
            .collect())
    }

    /// Catalog records always carry a price and an id, so every fallback
    /// offer has a price, a synthetic product link, and the fixed currency.
    fn to_offer(&self, product: CatalogProduct) -> Offer {
        let raw = serde_json::to_value(&product).unwrap_or_default();
        Offer {
            link: Some(format!("{}products/{}", self.base_url, product.id)),
            title: product.title,
            price: Some(product.price),
            currency: Some(CATALOG_CURRENCY.to_string()),
            image: product.thumbnail,
            merchant: None,
            raw,
        }
    }
}
