use crate::enums::TagCategory;
use crate::types::{AppId, ClassId, InstanceId};
use crate::serialize;
use serde::{Serialize, Deserialize};

/// Contains details about an item including names and tags. Every asset in an inventory points
/// to one of these through its `classid`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ClassInfo {
    /// The item's app ID.
    #[serde(default)]
    pub appid: Option<AppId>,
    /// The ID for this classinfo.
    #[serde(with = "serialize::string")]
    pub classid: ClassId,
    /// The specific instance ID for this classinfo.
    #[serde(default)]
    #[serde(skip_serializing)]
    #[serde(deserialize_with = "serialize::option_string_0_as_none")]
    pub instanceid: InstanceId,
    /// The name of the item.
    #[serde(default)]
    pub name: String,
    /// The name of the item on the Steam Community Market.
    #[serde(default)]
    pub market_name: String,
    /// The market hash name. This is used to link to the item on the Steam Community Market and
    /// is the key for price lookups.
    #[serde(default)]
    pub market_hash_name: String,
    /// The item's type e.g. "Mil-Spec Grade Rifle".
    #[serde(default)]
    #[serde(rename = "type")]
    pub r#type: String,
    /// Whether this item can be traded or not. `1` when tradable.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub tradable: u8,
    /// Whether this item can be listed on the Steam Community Market. `1` when marketable.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub marketable: u8,
    /// Tags for this item.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::hashmap_or_vec")]
    pub tags: Vec<Tag>,
}

impl ClassInfo {
    /// Whether the marketable flag is exactly `1`.
    pub fn is_marketable(&self) -> bool {
        self.marketable == 1
    }

    /// Gets the first tag belonging to `category`.
    pub fn get_tag(&self, category: TagCategory) -> Option<&Tag> {
        self.tags
            .iter()
            .find(|tag| tag.category == category.as_ref())
    }

    /// Gets the localized name of the first tag belonging to `category`, or an empty string if
    /// the item has no such tag.
    pub fn get_tag_name(&self, category: TagCategory) -> String {
        self.get_tag(category)
            .map(|tag| tag.name.clone())
            .unwrap_or_default()
    }
}

/// A tag.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Tag {
    /// The game's internal name of this tag e.g. "WearCategory2" under the "Exterior" category.
    #[serde(default)]
    pub internal_name: String,
    /// The localized name of this tag e.g. "Field-Tested". This value has the alias of
    /// `localized_tag_name`.
    #[serde(alias = "localized_tag_name")]
    pub name: String,
    /// The category of this tag e.g. "Exterior".
    pub category: String,
    /// The color associated with this tag.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// The localized category name of this tag. This value has the alias of
    /// `localized_category_name`.
    #[serde(default)]
    #[serde(alias = "localized_category_name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}
