//! Joins inventory assets with their descriptions and prices.

use crate::api::Inventory;
use crate::enums::TagCategory;
use crate::error::MissingClassInfoError;
use crate::export::ExportRecord;
use crate::price_cache::PriceCache;
use crate::pricing::PriceAPI;
use crate::request::Currency;
use crate::response::{ClassInfo, PriceRecord};

/// Turns an [`Inventory`] into export rows. Price responses are stored in the [`PriceCache`]
/// so each market hash name is requested at most once per cache.
#[derive(Debug, Clone)]
pub struct ItemEnricher {
    price_api: PriceAPI,
    price_cache: PriceCache,
}

impl ItemEnricher {
    /// Creates a new [`ItemEnricher`].
    pub fn new(price_api: PriceAPI, price_cache: PriceCache) -> Self {
        Self {
            price_api,
            price_cache,
        }
    }

    /// The cache used by this enricher.
    pub fn price_cache(&self) -> &PriceCache {
        &self.price_cache
    }

    /// Creates one record per asset, in response order. Assets without a description are
    /// logged and left out.
    pub async fn enrich(&self, inventory: &Inventory, currency: &Currency) -> Vec<ExportRecord> {
        let classinfos = inventory.classinfo_map();
        let mut records = Vec::with_capacity(inventory.assets.len());

        for asset in &inventory.assets {
            let Some(classinfo) = classinfos.get(&asset.classid) else {
                let error = MissingClassInfoError {
                    classid: asset.classid,
                    instanceid: asset.instanceid,
                };

                log::error!("{error} (asset {})", asset.assetid);
                continue;
            };
            let price = self.get_price(classinfo, currency).await;

            records.push(to_export_record(classinfo, &price));
        }

        records
    }

    /// Gets the raw price payload for an item, from the cache or from the pricing service.
    /// Non-marketable items are never requested. Failed requests are not cached.
    async fn get_price_payload(&self, classinfo: &ClassInfo, currency: &Currency) -> Option<String> {
        let item_key = &classinfo.market_hash_name;

        if let Some(payload) = self.price_cache.get(item_key) {
            log::debug!("Cache hit for {item_key}");
            return Some(payload);
        }

        if !classinfo.is_marketable() {
            return None;
        }

        log::info!("Getting price info for {item_key}");

        match self.price_api.get_price(item_key, currency).await {
            Ok(payload) => {
                self.price_cache.insert(item_key.clone(), payload.clone());
                Some(payload)
            },
            Err(error) => {
                log::error!("Error getting price data for {item_key}: {error}");
                None
            },
        }
    }

    async fn get_price(&self, classinfo: &ClassInfo, currency: &Currency) -> PriceRecord {
        let payload = self.get_price_payload(classinfo, currency).await;

        parse_price(payload.as_deref().unwrap_or("{}"))
    }
}

/// Parses a raw price payload. Anything that does not parse yields an empty record.
pub fn parse_price(payload: &str) -> PriceRecord {
    match serde_json::from_str::<PriceRecord>(payload) {
        Ok(price) => price,
        Err(error) => {
            log::error!("Error parsing price data. Invalid json response: {error}");
            log::debug!("{payload}");
            PriceRecord::default()
        },
    }
}

/// Flattens a description and its price into an export row.
pub fn to_export_record(classinfo: &ClassInfo, price: &PriceRecord) -> ExportRecord {
    fn value(value: &Option<String>) -> String {
        value.clone().unwrap_or_default()
    }

    ExportRecord {
        r#type: classinfo.r#type.clone(),
        market_name: classinfo.market_name.clone(),
        market_hash_name: classinfo.market_hash_name.clone(),
        marketable: if classinfo.is_marketable() { "Yes" } else { "No" }.into(),
        exterior: classinfo.get_tag_name(TagCategory::Exterior),
        item_set: classinfo.get_tag_name(TagCategory::ItemSet),
        quality: classinfo.get_tag_name(TagCategory::Quality),
        rarity: classinfo.get_tag_name(TagCategory::Rarity),
        weapon: classinfo.get_tag_name(TagCategory::Weapon),
        average_price: value(&price.average_price),
        median_price: value(&price.median_price),
        lowest_price: value(&price.lowest_price),
        highest_price: value(&price.highest_price),
        currency: value(&price.currency),
        standard_deviation: value(&price.standard_deviation),
        volume: value(&price.amount_sold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GetInventoryResponse;
    use crate::helpers::{get_default_client, USER_AGENT_STRING};
    use crate::response::Tag;
    use std::str::FromStr;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const REDLINE: &str = "AK-47 | Redline (Field-Tested)";

    fn inventory() -> Inventory {
        serde_json::from_str::<GetInventoryResponse>(include_str!("api/fixtures/inventory.json"))
            .unwrap()
            .into()
    }

    fn enricher(mock_server: &MockServer, price_cache: PriceCache) -> ItemEnricher {
        let price_api = PriceAPI::new(
            get_default_client(USER_AGENT_STRING).unwrap(),
            format!("{}/api/GetItemPrice/", mock_server.uri()),
        );

        ItemEnricher::new(price_api, price_cache)
    }

    fn usd() -> Currency {
        Currency::from_str("USD").unwrap()
    }

    #[tokio::test]
    async fn enriches_inventory() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/GetItemPrice/"))
            .and(query_param("id", REDLINE))
            .and(query_param("currency", "USD"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!("api/fixtures/price.json")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let records = enricher(&mock_server, PriceCache::new())
            .enrich(&inventory(), &usd())
            .await;

        // the asset without a description is left out
        assert_eq!(records.len(), 3);

        let redline = &records[0];

        assert_eq!(redline.market_hash_name, REDLINE);
        assert_eq!(redline.marketable, "Yes");
        assert_eq!(redline.exterior, "Field-Tested");
        assert_eq!(redline.item_set, "The Phoenix Collection");
        assert_eq!(redline.weapon, "AK-47");
        assert_eq!(redline.average_price, "10.50 USD");
        assert_eq!(redline.volume, "1562");
        assert_eq!(&records[1], redline);

        let coin = &records[2];

        assert_eq!(coin.market_hash_name, "5 Year Veteran Coin");
        assert_eq!(coin.marketable, "No");
        assert_eq!(coin.exterior, "");
        assert_eq!(coin.rarity, "Extraordinary");
        assert_eq!(coin.average_price, "");
    }

    #[tokio::test]
    async fn cached_price_is_not_requested() {
        let mock_server = MockServer::start().await;
        let price_cache = PriceCache::new();

        Mock::given(method("GET"))
            .and(path("/api/GetItemPrice/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!("api/fixtures/price.json")))
            .expect(0)
            .mount(&mock_server)
            .await;

        price_cache.insert(REDLINE.into(), r#"{"average_price":"9.99 USD"}"#.into());

        let records = enricher(&mock_server, price_cache)
            .enrich(&inventory(), &usd())
            .await;

        assert_eq!(records[0].average_price, "9.99 USD");
        assert_eq!(records[1].average_price, "9.99 USD");
    }

    #[tokio::test]
    async fn cache_is_shared_between_runs() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/GetItemPrice/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!("api/fixtures/price.json")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let enricher = enricher(&mock_server, PriceCache::new());

        enricher.enrich(&inventory(), &usd()).await;
        enricher.enrich(&inventory(), &usd()).await;

        assert_eq!(enricher.price_cache().len(), 1);
        assert!(enricher.price_cache().contains(REDLINE));
    }

    #[tokio::test]
    async fn failed_price_request_is_not_cached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/GetItemPrice/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&mock_server)
            .await;

        let enricher = enricher(&mock_server, PriceCache::new());
        let records = enricher.enrich(&inventory(), &usd()).await;

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].average_price, "");
        assert_eq!(records[0].marketable, "Yes");
        assert!(enricher.price_cache().is_empty());
    }

    #[tokio::test]
    async fn unparseable_price_is_empty_and_cached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/GetItemPrice/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<b>Error</b>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let enricher = enricher(&mock_server, PriceCache::new());
        let records = enricher.enrich(&inventory(), &usd()).await;

        assert_eq!(records[0].average_price, "");
        assert_eq!(records[1].average_price, "");
        assert_eq!(enricher.price_cache().get(REDLINE).as_deref(), Some("<b>Error</b>"));
    }

    #[test]
    fn parses_undefined_payload_as_empty() {
        assert_eq!(parse_price("{}"), PriceRecord::default());
        assert_eq!(parse_price("null"), PriceRecord::default());
        assert_eq!(parse_price("not json"), PriceRecord::default());
    }

    #[test]
    fn uses_first_tag_of_each_category() {
        let mut classinfo: ClassInfo = serde_json::from_str(include_str!("api/fixtures/classinfo_csgo.json")).unwrap();

        classinfo.tags.push(Tag {
            internal_name: "WearCategory0".into(),
            name: "Factory New".into(),
            category: "Exterior".into(),
            color: None,
            category_name: None,
        });

        let record = to_export_record(&classinfo, &PriceRecord::default());

        assert_eq!(record.exterior, "Field-Tested");
        assert_eq!(record.quality, "Normal");
        assert_eq!(record.rarity, "Classified");
    }
}
