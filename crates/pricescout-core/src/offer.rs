use serde::{Deserialize, Serialize};

/// A normalized, price-bearing search result shown to the user.
///
/// Upstream provider payloads are not schema-stable, so every field except
/// `title` is optional; absent data is `None`, never a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    /// Product title. Empty string when the provider gave none.
    pub title: String,
    /// Parsed numeric price. `None` when the provider value was absent or
    /// unparseable.
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub merchant: Option<String>,
    /// Original provider record, kept for debugging. Opaque to sorting and
    /// filtering.
    pub raw: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_serializes_optional_fields_as_null() {
        let offer = Offer {
            title: "Widget".to_string(),
            price: Some(12.5),
            currency: None,
            image: None,
            link: Some("https://shop.example.com/widget".to_string()),
            merchant: None,
            raw: serde_json::json!({"title": "Widget"}),
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&offer).expect("serialize")).expect("parse");
        assert_eq!(json["title"].as_str(), Some("Widget"));
        assert!((json["price"].as_f64().unwrap() - 12.5).abs() < f64::EPSILON);
        assert!(json["currency"].is_null());
        assert_eq!(json["raw"]["title"].as_str(), Some("Widget"));
    }
}
