use crate::types::{AppId, ContextId, AssetId, ClassId, InstanceId, Amount};
use crate::serialize;
use serde::{Serialize, Deserialize};

/// An asset as it appears in the `assets` list of an inventory response. Names and tags live on
/// the matching [`ClassInfo`][super::ClassInfo].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawAsset {
    /// The app ID e.g. 730 for Counter-Strike.
    #[serde(default)]
    pub appid: AppId,
    /// The context ID.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub contextid: ContextId,
    /// The unique asset ID.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub assetid: AssetId,
    /// The ID of the classinfo describing this asset.
    #[serde(with = "serialize::string")]
    pub classid: ClassId,
    /// The instance ID of the classinfo.
    #[serde(default)]
    #[serde(skip_serializing)]
    #[serde(deserialize_with = "serialize::option_string_0_as_none")]
    pub instanceid: InstanceId,
    /// The amount. For non-stackable items this is simply `1`.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub amount: Amount,
}
