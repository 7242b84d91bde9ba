//! Outbound search sources: the shopping-search provider and the fixed
//! fallback catalog.

mod catalog;
mod shopping;

pub use catalog::CatalogClient;
pub use shopping::ShoppingClient;
