use crate::serialize;
use serde::{Serialize, Deserialize};

/// Market statistics for one item. Every field is optional; the pricing service omits fields it
/// has no data for and sends an error body for unknown items.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PriceRecord {
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    pub average_price: Option<String>,
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    pub median_price: Option<String>,
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    pub lowest_price: Option<String>,
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    pub highest_price: Option<String>,
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    pub standard_deviation: Option<String>,
    /// The number of units sold. Exported as the volume.
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    pub amount_sold: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_price_response() {
        let price: PriceRecord = serde_json::from_str(include_str!("../api/fixtures/price.json")).unwrap();

        assert_eq!(price.average_price.as_deref(), Some("10.50 USD"));
        assert_eq!(price.currency.as_deref(), Some("USD"));
        assert_eq!(price.amount_sold.as_deref(), Some("1562"));
    }

    #[test]
    fn parses_error_response_as_empty() {
        let price: PriceRecord = serde_json::from_str(r#"{"success":false,"reason":"Item not found"}"#).unwrap();

        assert_eq!(price, PriceRecord::default());
    }
}
