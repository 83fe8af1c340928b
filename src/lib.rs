//! Exports Steam inventories to CSV with market prices for every item.
//!
//! For each identifier the profile is resolved to a SteamID, the inventory is loaded, every
//! asset is joined with its description and priced, and the rows are written to
//! `{identifier}_{steamid64}_{timestamp}.csv`. Prices are cached by market hash name for the
//! lifetime of the [`PriceCache`], so items shared between assets or users are requested once.

pub mod api;
pub mod enums;
pub mod enricher;
pub mod error;
pub mod export;
pub mod helpers;
pub mod price_cache;
pub mod pricer;
pub mod pricing;
pub mod prompt;
pub mod request;
pub mod response;
pub mod types;

mod serialize;
mod time;

pub use api::{Inventory, SteamInventoryAPI};
pub use enricher::ItemEnricher;
pub use error::Error;
pub use export::ExportRecord;
pub use price_cache::PriceCache;
pub use pricer::{InventoryPricer, InventoryPricerBuilder};
pub use pricing::PriceAPI;
pub use prompt::Prompt;
pub use request::{Currency, UserInput, UserRequest};
pub use steamid_ng::SteamID;
