//! Requests to the item pricing service.

use crate::error::Error;
use crate::request::Currency;
use crate::types::HttpClient;
use crate::helpers::response_text;
use serde::Serialize;

/// Loads price statistics for items on the Steam Community Market.
#[derive(Debug, Clone)]
pub struct PriceAPI {
    pub(crate) client: HttpClient,
    pub(crate) url: String,
}

impl PriceAPI {
    /// The URL of the pricing endpoint.
    pub const URL: &'static str = "https://csgobackpack.net/api/GetItemPrice/";

    /// Creates a new [`PriceAPI`] requesting prices from `url`.
    pub fn new(client: HttpClient, url: String) -> Self {
        Self {
            client,
            url,
        }
    }

    /// Gets the raw price response for the item with `market_hash_name`. The body is returned
    /// unparsed; the service answers unknown items with bodies that are not always JSON.
    pub async fn get_price(
        &self,
        market_hash_name: &str,
        currency: &Currency,
    ) -> Result<String, Error> {
        #[derive(Serialize, Debug)]
        struct Query<'a> {
            id: &'a str,
            currency: &'a Currency,
        }

        let response = self.client.get(&self.url)
            .query(&Query {
                id: market_hash_name,
                currency,
            })
            .send()
            .await?;

        response_text(response).await
    }
}
