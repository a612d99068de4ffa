//! Wire types for the store-availability response.
//!
//! The shape is owned by the retailer and tolerated defensively: everything
//! but the discriminating fields is `#[serde(default)]` so partial responses
//! deserialize instead of failing the whole check. Location identifiers have
//! been observed as both JSON strings and numbers, so they stay as raw
//! `serde_json::Value` until normalized by [`value_as_string`].

use serde::Deserialize;

/// Top-level response. `ispu` ("in-store pickup") is the only section this
/// system reads; its absence means no data for the SKU/zip, not an error.
#[derive(Debug, Deserialize)]
pub struct StoreAvailabilityResponse {
    #[serde(default)]
    pub ispu: Option<IspuSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IspuSection {
    /// Location table: one entry per physical store near the zip code.
    #[serde(default)]
    pub locations: Vec<IspuLocation>,
    /// Per-item availability, referencing `locations` by id.
    #[serde(default)]
    pub items: Vec<IspuItem>,
}

#[derive(Debug, Deserialize)]
pub struct IspuLocation {
    /// String or number on the wire.
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// String or number on the wire.
    #[serde(default)]
    pub distance: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct IspuItem {
    #[serde(default)]
    pub locations: Vec<ItemLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLocation {
    /// String or number on the wire; joined against [`IspuLocation::id`].
    #[serde(default)]
    pub location_id: serde_json::Value,
    #[serde(default)]
    pub availability: Option<ItemAvailability>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAvailability {
    /// Discriminator: `"PICKUP"`, `"SHIP_TO_LOCATION"`, or something new the
    /// remote service invented — unknown values are ignored.
    #[serde(default)]
    pub fulfillment_type: Option<String>,
    #[serde(default)]
    pub available_pickup_quantity: Option<u32>,
    #[serde(default)]
    pub min_date: Option<String>,
    #[serde(default)]
    pub max_date: Option<String>,
    #[serde(default)]
    pub service_level: Option<String>,
}

/// Normalizes a wire value that may be a string or a number into a string.
pub(crate) fn value_as_string(value: &serde_json::Value) -> Option<String> {
    value.as_str().map(str::to_string).or_else(|| {
        if value.is_number() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_as_string_accepts_strings_and_numbers() {
        assert_eq!(
            value_as_string(&serde_json::json!("100")),
            Some("100".to_string())
        );
        assert_eq!(
            value_as_string(&serde_json::json!(100)),
            Some("100".to_string())
        );
        assert_eq!(value_as_string(&serde_json::Value::Null), None);
        assert_eq!(value_as_string(&serde_json::json!(["100"])), None);
    }

    #[test]
    fn tolerates_minimal_location_entries() {
        let raw = serde_json::json!({
            "ispu": {
                "locations": [{ "id": 100 }],
                "items": [{ "locations": [{ "locationId": 100 }] }]
            }
        });
        let parsed: StoreAvailabilityResponse =
            serde_json::from_value(raw).expect("partial response should deserialize");
        let ispu = parsed.ispu.expect("ispu section");
        assert_eq!(ispu.locations.len(), 1);
        assert!(ispu.items[0].locations[0].availability.is_none());
    }
}
