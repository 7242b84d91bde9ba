use thiserror::Error;

/// Errors raised by the search sources and the aggregation service.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was empty after trimming. No upstream call is made.
    #[error("empty search query")]
    EmptyQuery,

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A client was constructed with an unparseable base URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
