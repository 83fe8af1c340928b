//! Types for common values in Steam responses.

/// Uniquely identifies an application on Steam. For example: 730 for Counter-Strike.
pub type AppId = u32;
/// A context ID belonging to an [`AppId`].
pub type ContextId = u64;
/// An asset ID unique to an [`AppId`] + [`ContextId`] combination.
pub type AssetId = u64;
/// An amount for stackable items. For non-stackable items this is simply `1`.
pub type Amount = u32;
/// An ID for a [`ClassInfo`][crate::response::ClassInfo] which provides a general overview of an
/// item.
pub type ClassId = u64;
/// A more specific instance of a [`ClassInfo`][crate::response::ClassInfo].
pub type InstanceId = Option<u64>;
/// The market hash name of an item. Price lookups and the price cache are keyed by this value.
pub type ItemKey = String;

use crate::response::ClassInfo;
use std::sync::Arc;
use std::collections::HashMap;
use reqwest_middleware::ClientWithMiddleware;

/// The client used for every request.
pub type HttpClient = ClientWithMiddleware;
/// Descriptions keyed by classid.
pub type ClassInfoMap = HashMap<ClassId, Arc<ClassInfo>>;
