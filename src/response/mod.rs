//! Models for values in Steam and pricing responses.

mod asset;
mod classinfo;
mod price;
mod resolved_account;

pub use asset::RawAsset;
pub use classinfo::{ClassInfo, Tag};
pub use price::PriceRecord;
pub use resolved_account::ResolvedAccount;
