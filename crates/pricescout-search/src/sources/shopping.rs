//! HTTP client for the shopping-search provider.
//!
//! Wraps `reqwest` with provider-specific error handling and envelope
//! tolerance. Failures here are expected (rate limits, revoked keys) and are
//! recovered by the aggregation service, never surfaced to the caller.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::SearchError;

const DEFAULT_BASE_URL: &str = "https://serpapi.com/search.json";
const ENGINE: &str = "google_shopping";
const LOCALE: &str = "en";
const REGION: &str = "us";
const RESULT_LIMIT: u32 = 20;

/// Envelope fields that may carry the result list, tried in order. The
/// provider moves the list around depending on result mix.
const RESULT_FIELDS: &[&str] = &[
    "shopping_results",
    "inline_shopping_results",
    "organic_results",
];

/// Client for the shopping-search provider.
///
/// Use [`ShoppingClient::new`] for production or
/// [`ShoppingClient::with_base_url`] to point at a mock server in tests.
pub struct ShoppingClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl ShoppingClient {
    /// Creates a client pointed at the production provider endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| SearchError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs one shopping search and returns the raw result records.
    ///
    /// A single GET with pinned locale/region and a 20-result cap. No
    /// retries: the caller treats any failure as zero results.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::UpstreamStatus`] on a non-2xx response, carrying the
    ///   best-effort body text.
    /// - [`SearchError::Deserialize`] if the body is not valid JSON.
    pub async fn search(&self, query: &str) -> Result<Vec<Value>, SearchError> {
        let url = self.build_url(query);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: Value =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("shopping search(q={query})"),
                source: e,
            })?;

        Ok(extract_results(&envelope))
    }

    /// Builds the request URL with percent-encoded query parameters via
    /// [`Url::query_pairs_mut`].
    fn build_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("engine", ENGINE);
            pairs.append_pair("q", query);
            pairs.append_pair("hl", LOCALE);
            pairs.append_pair("gl", REGION);
            pairs.append_pair("num", &RESULT_LIMIT.to_string());
            pairs.append_pair("api_key", &self.api_key);
        }
        url
    }
}

/// Pulls the result list out of the response envelope, trying each known
/// field name in order. An envelope with none of them yields an empty list,
/// which the aggregation service treats as "nothing usable".
fn extract_results(envelope: &Value) -> Vec<Value> {
    RESULT_FIELDS
        .iter()
        .find_map(|field| envelope.get(*field)?.as_array())
        .cloned()
        .unwrap_or_default()
}
