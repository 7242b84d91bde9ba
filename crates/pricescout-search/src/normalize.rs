//! Normalization of provider-specific result records into the uniform
//! [`Offer`] shape.
//!
//! Shopping-search payloads are not schema-stable: the same logical field
//! shows up under different names depending on result type and provider
//! version. Each output field therefore resolves through an ordered alias
//! list (first non-empty match wins), so the precedence is auditable and
//! testable on its own.

use pricescout_core::Offer;
use serde_json::Value;

use crate::price::parse_price;

const TITLE_FIELDS: &[&str] = &["title", "product_title", "name"];
/// Tried before falling back to the first element of `thumbnails`.
const IMAGE_FIELDS: &[&str] = &["thumbnail", "serpapi_thumbnail", "image"];
const LINK_FIELDS: &[&str] = &["link", "product_link", "source", "serpapi_link"];
const MERCHANT_FIELDS: &[&str] = &["merchant", "source", "store"];

/// Maps one raw provider record into an [`Offer`].
///
/// Pure and infallible: absent or malformed fields become `None` (or an
/// empty title), never an error. The input record is retained verbatim in
/// [`Offer::raw`].
#[must_use]
pub fn normalize_offer(raw: &Value) -> Offer {
    let price_value = price_source(raw);

    Offer {
        title: first_string(raw, TITLE_FIELDS).unwrap_or_default(),
        price: parse_price(price_value),
        currency: first_string(raw, &["currency"])
            .or_else(|| price_value.and_then(derive_currency)),
        image: first_string(raw, IMAGE_FIELDS).or_else(|| first_list_string(raw, "thumbnails")),
        link: first_string(raw, LINK_FIELDS),
        merchant: first_string(raw, MERCHANT_FIELDS),
        raw: raw.clone(),
    }
}

/// First non-empty string value among `fields`, in order.
fn first_string(item: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .find_map(|field| non_empty_string(item.get(*field)))
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    let s = value?.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    Some(s.to_string())
}

/// First element of the list under `field`, when it is a non-empty string.
fn first_list_string(item: &Value, field: &str) -> Option<String> {
    non_empty_string(item.get(field)?.as_array()?.first())
}

fn present<'a>(item: &'a Value, field: &str) -> Option<&'a Value> {
    item.get(field).filter(|v| !v.is_null())
}

/// The raw value the price is parsed from: top-level `extracted_price`, then
/// `price`, then the first sub-offer's `price`/`extracted_price`.
fn price_source(item: &Value) -> Option<&Value> {
    present(item, "extracted_price")
        .or_else(|| present(item, "price"))
        .or_else(|| {
            let offer = item.get("offers")?.as_array()?.first()?;
            present(offer, "price").or_else(|| present(offer, "extracted_price"))
        })
}

/// Derives a currency marker by stripping digits, separators, and whitespace
/// from the raw price representation (`"$12.99"` -> `"$"`).
fn derive_currency(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let symbol: String = text
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '.' && *c != ',' && !c.is_whitespace())
        .collect();
    if symbol.is_empty() {
        return None;
    }
    Some(symbol)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn normalizes_price_link_and_derived_currency() {
        let raw = json!({"price": "$12", "link": "x"});
        let offer = normalize_offer(&raw);
        assert_eq!(offer.price, Some(12.0));
        assert_eq!(offer.link.as_deref(), Some("x"));
        assert_eq!(offer.currency.as_deref(), Some("$"));
        assert_eq!(offer.title, "");
        assert_eq!(offer.raw, raw);
    }

    #[test]
    fn title_aliases_resolve_in_order() {
        let offer = normalize_offer(&json!({"product_title": "Alias", "name": "Last"}));
        assert_eq!(offer.title, "Alias");

        let offer = normalize_offer(&json!({"name": "Last"}));
        assert_eq!(offer.title, "Last");

        let offer = normalize_offer(&json!({"title": "First", "name": "Last"}));
        assert_eq!(offer.title, "First");
    }

    #[test]
    fn empty_strings_fall_through_to_next_alias() {
        let offer = normalize_offer(&json!({"title": "  ", "product_title": "Real Title"}));
        assert_eq!(offer.title, "Real Title");
    }

    #[test]
    fn image_falls_back_to_thumbnails_list() {
        let offer = normalize_offer(&json!({"thumbnails": ["https://img.example.com/1.jpg"]}));
        assert_eq!(
            offer.image.as_deref(),
            Some("https://img.example.com/1.jpg")
        );

        let offer = normalize_offer(&json!({
            "thumbnail": "https://img.example.com/t.jpg",
            "thumbnails": ["https://img.example.com/1.jpg"]
        }));
        assert_eq!(offer.image.as_deref(), Some("https://img.example.com/t.jpg"));
    }

    #[test]
    fn extracted_price_wins_over_price_string() {
        let offer = normalize_offer(&json!({"extracted_price": 1299.5, "price": "₹1,299.50"}));
        assert_eq!(offer.price, Some(1299.5));
        // Numeric source carries no symbol to derive.
        assert_eq!(offer.currency, None);
    }

    #[test]
    fn null_extracted_price_falls_through_to_price() {
        let offer = normalize_offer(&json!({"extracted_price": null, "price": "$5.25"}));
        assert_eq!(offer.price, Some(5.25));
    }

    #[test]
    fn price_falls_back_to_first_sub_offer() {
        let offer = normalize_offer(&json!({"offers": [{"price": "$7.99"}, {"price": "$9.99"}]}));
        assert_eq!(offer.price, Some(7.99));
    }

    #[test]
    fn explicit_currency_field_wins_over_derivation() {
        let offer = normalize_offer(&json!({"price": "$12", "currency": "CAD"}));
        assert_eq!(offer.currency.as_deref(), Some("CAD"));
    }

    #[test]
    fn merchant_falls_back_to_source_then_store() {
        let offer = normalize_offer(&json!({"source": "BigShop"}));
        assert_eq!(offer.merchant.as_deref(), Some("BigShop"));

        let offer = normalize_offer(&json!({"store": "Corner Store"}));
        assert_eq!(offer.merchant.as_deref(), Some("Corner Store"));
    }

    #[test]
    fn bare_record_yields_empty_offer() {
        let offer = normalize_offer(&json!({}));
        assert_eq!(offer.title, "");
        assert_eq!(offer.price, None);
        assert_eq!(offer.currency, None);
        assert_eq!(offer.image, None);
        assert_eq!(offer.link, None);
        assert_eq!(offer.merchant, None);
    }
}
