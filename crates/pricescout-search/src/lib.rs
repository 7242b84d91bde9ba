//! Offer search for pricescout.
//!
//! Queries the shopping-search provider, normalizes its heterogeneous result
//! records into uniform [`pricescout_core::Offer`]s, falls back to a fixed
//! catalog when the primary source yields nothing usable, and caches
//! per-query results for a short TTL.

pub mod cache;
pub mod error;
pub mod normalize;
pub mod price;
pub mod service;
pub mod sources;

pub use cache::{cache_key, ResultCache};
pub use error::SearchError;
pub use normalize::normalize_offer;
pub use price::parse_price;
pub use service::{SearchOutcome, SearchService, SearchSource};
pub use sources::{CatalogClient, ShoppingClient};
