//! Requests to the Steam Community website.

mod response;

pub use response::{GetInventoryResponse, GetProfileResponse};

use crate::error::{Error, ParameterError};
use crate::response::{ClassInfo, RawAsset, ResolvedAccount};
use crate::types::{AppId, ClassInfoMap, ContextId, HttpClient};
use crate::helpers::{parses_response, response_text};
use std::sync::Arc;
use serde::Serialize;
use steamid_ng::SteamID;
use url::Url;

/// Counter-Strike.
pub const DEFAULT_APPID: AppId = 730;
/// The context holding Counter-Strike items.
pub const DEFAULT_CONTEXTID: ContextId = 2;
/// The number of inventory entries requested.
pub const DEFAULT_INVENTORY_COUNT: u32 = 200;
/// The language for item descriptions.
pub const DEFAULT_LANGUAGE: &str = "english";

/// An inventory as returned by Steam: assets and the descriptions they point to.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Assets in response order.
    pub assets: Vec<RawAsset>,
    /// Descriptions in response order.
    pub descriptions: Vec<Arc<ClassInfo>>,
}

impl Inventory {
    /// Maps each classid to the first description carrying it.
    pub fn classinfo_map(&self) -> ClassInfoMap {
        let mut map = ClassInfoMap::new();

        for classinfo in &self.descriptions {
            map.entry(classinfo.classid)
                .or_insert_with(|| Arc::clone(classinfo));
        }

        map
    }
}

impl From<GetInventoryResponse> for Inventory {
    fn from(response: GetInventoryResponse) -> Self {
        Self {
            assets: response.assets,
            descriptions: response.descriptions
                .into_iter()
                .map(Arc::new)
                .collect(),
        }
    }
}

/// Resolves profiles and loads inventories from the Steam Community website.
#[derive(Debug, Clone)]
pub struct SteamInventoryAPI {
    pub(crate) client: HttpClient,
    pub(crate) hostname: String,
    pub(crate) language: String,
    pub(crate) appid: AppId,
    pub(crate) contextid: ContextId,
    pub(crate) count: u32,
}

impl SteamInventoryAPI {
    /// The hostname of the Steam Community website.
    pub const HOSTNAME: &'static str = "https://steamcommunity.com";

    /// Creates a new [`SteamInventoryAPI`] using the default app, context, language and count.
    pub fn new(client: HttpClient, hostname: String) -> Self {
        Self {
            client,
            hostname,
            language: DEFAULT_LANGUAGE.into(),
            appid: DEFAULT_APPID,
            contextid: DEFAULT_CONTEXTID,
            count: DEFAULT_INVENTORY_COUNT,
        }
    }

    fn get_url<I>(&self, segments: I) -> Result<Url, ParameterError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = Url::parse(&self.hostname)?;

        url.path_segments_mut()
            .map_err(|_| ParameterError::UrlCannotBeABase(self.hostname.clone()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Resolves `identifier` (the vanity name in `/id/{identifier}`) to the account's SteamID
    /// using the XML profile.
    pub async fn resolve_steamid(&self, identifier: &str) -> Result<ResolvedAccount, Error> {
        let url = self.get_url(["id", identifier])?;
        let response = self.client.get(url)
            .query(&[("xml", 1)])
            .send()
            .await?;
        let body = response_text(response).await?;
        let profile: GetProfileResponse = quick_xml::de::from_str(&body)?;

        if let Some(message) = profile.error {
            return Err(Error::Profile(message));
        }

        let steamid64 = profile.steamid64
            .map(|steamid64| steamid64.trim().to_owned())
            .filter(|steamid64| !steamid64.is_empty())
            .ok_or(Error::MissingSteamId)?;
        let steamid = steamid64.parse::<u64>()
            .map(SteamID::from)
            .map_err(|_| Error::InvalidSteamId(steamid64.clone()))?;

        Ok(ResolvedAccount {
            source_identifier: identifier.to_owned(),
            steamid,
        })
    }

    /// Gets the inventory for `steamid`. Only the first page of `count` entries is loaded.
    pub async fn get_inventory(&self, steamid: SteamID) -> Result<Inventory, Error> {
        #[derive(Serialize, Debug)]
        struct Query<'a> {
            l: &'a str,
            count: u32,
        }

        let sid = u64::from(steamid);
        let url = self.get_url([
            "inventory".to_string(),
            sid.to_string(),
            self.appid.to_string(),
            self.contextid.to_string(),
        ])?;
        let response = self.client.get(url)
            .query(&Query {
                l: &self.language,
                count: self.count,
            })
            .send()
            .await?;
        let body: GetInventoryResponse = parses_response(response).await?;

        if body.success != 1 {
            return Err(Error::ResponseUnsuccessful);
        }

        log::debug!(
            "Loaded {} assets of {} for {sid}",
            body.assets.len(),
            body.total_inventory_count,
        );

        Ok(body.into())
    }
}
