//! Exports priced inventories for a list of users.

mod builder;

pub use builder::InventoryPricerBuilder;

use crate::api::SteamInventoryAPI;
use crate::enricher::ItemEnricher;
use crate::error::Error;
use crate::export::export_csv;
use crate::price_cache::PriceCache;
use crate::request::UserRequest;
use crate::time::get_system_time;
use std::path::{Path, PathBuf};

/// Resolves, loads, prices and exports inventories one user at a time.
///
/// # Examples
/// ```no_run
/// use steam_inventory_pricer::{InventoryPricer, UserInput, Currency};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pricer = InventoryPricer::builder()
///         .output_directory("./exports")
///         .build()?;
///     let input = UserInput {
///         identifiers: vec!["gabelogannewell".into()],
///         currency: "usd".parse::<Currency>()?,
///     };
///     let filepaths = pricer.run(&input.requests()).await;
///
///     println!("{} inventories exported", filepaths.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InventoryPricer {
    api: SteamInventoryAPI,
    enricher: ItemEnricher,
    output_directory: PathBuf,
}

impl InventoryPricer {
    /// Creates a builder for an [`InventoryPricer`].
    pub fn builder() -> InventoryPricerBuilder {
        InventoryPricerBuilder::new()
    }

    /// The price cache shared by every user in this pricer.
    pub fn price_cache(&self) -> &PriceCache {
        self.enricher.price_cache()
    }

    /// The directory exports are written to.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Exports every request in order. A request that fails is logged and skipped. Returns the
    /// paths of the written files.
    pub async fn run(&self, requests: &[UserRequest]) -> Vec<PathBuf> {
        let mut filepaths = Vec::with_capacity(requests.len());

        for request in requests {
            match self.export_inventory(request).await {
                Ok(filepath) => filepaths.push(filepath),
                Err(_error) => log::info!("Skipping {}", request.identifier),
            }
        }

        filepaths
    }

    /// Exports the inventory of one user. Nothing is written unless the profile resolves and
    /// the inventory loads.
    pub async fn export_inventory(&self, request: &UserRequest) -> Result<PathBuf, Error> {
        let identifier = &request.identifier;

        log::info!("Getting SteamID64 for {identifier}");

        let account = self.api.resolve_steamid(identifier).await
            .inspect_err(|error| log::error!("Error getting SteamID64 for {identifier}: {error}"))?;
        let steamid64 = account.steamid64();

        log::info!("Getting inventory for {steamid64}");

        let inventory = self.api.get_inventory(account.steamid).await
            .inspect_err(|error| log::error!("Error getting inventory data for {steamid64}: {error}"))?;
        let records = self.enricher.enrich(&inventory, &request.currency).await;
        let filepath = export_csv(
            &self.output_directory,
            &account.source_identifier,
            steamid64,
            get_system_time(),
            &records,
        )
            .inspect_err(|error| log::error!("Error saving data for {identifier}: {error}"))?;

        log::info!("Saved {} items to {}", records.len(), filepath.display());

        Ok(filepath)
    }
}
