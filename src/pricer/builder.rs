use super::InventoryPricer;
use crate::api::{
    SteamInventoryAPI,
    DEFAULT_APPID,
    DEFAULT_CONTEXTID,
    DEFAULT_INVENTORY_COUNT,
    DEFAULT_LANGUAGE,
};
use crate::enricher::ItemEnricher;
use crate::error::Error;
use crate::helpers::{get_default_client, USER_AGENT_STRING};
use crate::price_cache::PriceCache;
use crate::pricing::PriceAPI;
use crate::types::{AppId, ContextId};
use std::path::PathBuf;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing an [`InventoryPricer`].
#[derive(Debug, Clone)]
pub struct InventoryPricerBuilder {
    /// The base URL of the Steam Community website.
    pub(crate) community_url: String,
    /// The URL of the pricing endpoint.
    pub(crate) price_url: String,
    /// The app of the exported inventory. Defaults to 730.
    pub(crate) appid: AppId,
    /// The context of the exported inventory. Defaults to 2.
    pub(crate) contextid: ContextId,
    /// The language for item descriptions. Defaults to "english".
    pub(crate) language: String,
    /// The number of inventory entries to request. Defaults to 200.
    pub(crate) inventory_count: u32,
    /// The directory exports are written to. Defaults to the working directory.
    pub(crate) output_directory: PathBuf,
    /// The [`PriceCache`] to use. Useful for sharing prices between pricers.
    pub(crate) price_cache: Option<PriceCache>,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// User agent for requests.
    pub(crate) user_agent: &'static str,
}

impl Default for InventoryPricerBuilder {
    fn default() -> Self {
        Self {
            community_url: SteamInventoryAPI::HOSTNAME.into(),
            price_url: PriceAPI::URL.into(),
            appid: DEFAULT_APPID,
            contextid: DEFAULT_CONTEXTID,
            language: DEFAULT_LANGUAGE.into(),
            inventory_count: DEFAULT_INVENTORY_COUNT,
            output_directory: PathBuf::from("."),
            price_cache: None,
            client: None,
            user_agent: USER_AGENT_STRING,
        }
    }
}

impl InventoryPricerBuilder {
    /// Creates a new [`InventoryPricerBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The base URL of the Steam Community website.
    pub fn community_url<T>(mut self, community_url: T) -> Self
    where
        T: Into<String>,
    {
        self.community_url = community_url.into();
        self
    }

    /// The URL of the pricing endpoint.
    pub fn price_url<T>(mut self, price_url: T) -> Self
    where
        T: Into<String>,
    {
        self.price_url = price_url.into();
        self
    }

    /// The app of the exported inventory.
    pub fn appid(mut self, appid: AppId) -> Self {
        self.appid = appid;
        self
    }

    /// The context of the exported inventory.
    pub fn contextid(mut self, contextid: ContextId) -> Self {
        self.contextid = contextid;
        self
    }

    /// The language for item descriptions, as used by the Steam Community website e.g.
    /// "english".
    pub fn language<T>(mut self, language: T) -> Self
    where
        T: Into<String>,
    {
        self.language = language.into();
        self
    }

    /// The number of inventory entries to request.
    pub fn inventory_count(mut self, inventory_count: u32) -> Self {
        self.inventory_count = inventory_count;
        self
    }

    /// The directory exports are written to.
    pub fn output_directory<T>(mut self, output_directory: T) -> Self
    where
        T: Into<PathBuf>,
    {
        self.output_directory = output_directory.into();
        self
    }

    /// The [`PriceCache`] to use.
    pub fn price_cache(mut self, price_cache: PriceCache) -> Self {
        self.price_cache = Some(price_cache);
        self
    }

    /// Client to use for requests.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }

    /// User agent for requests. Ignored when a client is given.
    pub fn user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Builds the [`InventoryPricer`].
    pub fn build(self) -> Result<InventoryPricer, Error> {
        let client = match self.client {
            Some(client) => client,
            None => get_default_client(self.user_agent)?,
        };
        let api = SteamInventoryAPI {
            client: client.clone(),
            hostname: self.community_url,
            language: self.language,
            appid: self.appid,
            contextid: self.contextid,
            count: self.inventory_count,
        };
        let price_api = PriceAPI::new(client, self.price_url);
        let enricher = ItemEnricher::new(
            price_api,
            self.price_cache.unwrap_or_default(),
        );

        Ok(InventoryPricer {
            api,
            enricher,
            output_directory: self.output_directory,
        })
    }
}
