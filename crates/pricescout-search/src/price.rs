//! Price extraction from heterogeneous provider representations.

use serde_json::Value;

/// Extracts a numeric price from a raw provider value.
///
/// Numbers pass through directly. Anything else is rendered to text and
/// scrubbed down to ASCII digits, commas, and periods; commas are treated as
/// thousands separators and dropped before parsing. Comma-decimal locales
/// (`"1.299,50"`) therefore misparse; accepted limitation inherited from
/// the provider contract, not silently corrected here.
///
/// Returns `None` for absent values, JSON null, and anything that does not
/// scrub down to a finite number.
#[must_use]
pub fn parse_price(raw: Option<&Value>) -> Option<f64> {
    match raw? {
        Value::Null => None,
        Value::Number(n) => n.as_f64().filter(|p| p.is_finite()),
        Value::String(s) => parse_price_text(s),
        other => parse_price_text(&other.to_string()),
    }
}

fn parse_price_text(text: &str) -> Option<f64> {
    let scrubbed: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    scrubbed
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
}
