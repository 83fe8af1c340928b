use crate::response::{ClassInfo, RawAsset};
use crate::serialize;
use serde::Deserialize;

/// The body of `/inventory/{steamid}/{appid}/{contextid}`. Empty inventories omit `assets` and
/// `descriptions`.
#[derive(Deserialize, Debug)]
pub struct GetInventoryResponse {
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub success: u8,
    #[serde(default)]
    pub assets: Vec<RawAsset>,
    #[serde(default)]
    pub descriptions: Vec<ClassInfo>,
    #[serde(default)]
    pub total_inventory_count: u32,
}

/// The body of `/id/{identifier}?xml=1`. Unknown profiles respond with a `<response>` document
/// holding only an `<error>`.
#[derive(Deserialize, Debug, Default)]
pub struct GetProfileResponse {
    #[serde(default)]
    #[serde(rename = "steamID64")]
    pub steamid64: Option<String>,
    #[serde(default)]
    #[serde(rename = "steamID")]
    pub persona_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_get_inventory_response() {
        let response: GetInventoryResponse = serde_json::from_str(include_str!("fixtures/inventory.json")).unwrap();
        let asset = response.assets.first().unwrap();

        assert_eq!(response.success, 1);
        assert_eq!(response.assets.len(), 4);
        assert_eq!(response.descriptions.len(), 2);
        assert_eq!(asset.assetid, 27412938461);
        assert_eq!(asset.classid, 100);
        assert_eq!(asset.contextid, 2);
    }

    #[test]
    fn parses_empty_inventory_response() {
        let response: GetInventoryResponse = serde_json::from_str(r#"{"total_inventory_count":0,"success":1,"rwgrsn":-2}"#).unwrap();

        assert!(response.assets.is_empty());
        assert!(response.descriptions.is_empty());
    }

    #[test]
    fn parses_profile_response() {
        let response: GetProfileResponse = quick_xml::de::from_str(include_str!("fixtures/profile.xml")).unwrap();

        assert_eq!(response.steamid64.as_deref(), Some("76561198000000123"));
        assert_eq!(response.persona_name.as_deref(), Some("alice"));
        assert_eq!(response.error, None);
    }

    #[test]
    fn parses_profile_error_response() {
        let response: GetProfileResponse = quick_xml::de::from_str(include_str!("fixtures/profile_not_found.xml")).unwrap();

        assert_eq!(response.steamid64, None);
        assert_eq!(response.error.as_deref(), Some("The specified profile could not be found."));
    }
}
