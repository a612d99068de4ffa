//! Outbound payload for the store-availability endpoint.
//!
//! Every field other than `zip_code` and the item's `sku` is a protocol
//! constant dictated by the remote API — not tunable business logic. The
//! endpoint expects exactly one item with quantity 1 and the two carrier
//! pickup types below.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub zip_code: String,
    pub show_on_shelf: bool,
    pub lookup_in_store_quantity: bool,
    pub xbox_all_access: bool,
    pub consolidated: bool,
    pub show_only_on_shelf: bool,
    pub show_in_store: bool,
    pub pickup_types: Vec<&'static str>,
    pub only_best_buy_locations: bool,
    pub items: Vec<RequestItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestItem {
    pub sku: String,
    pub condition: Option<String>,
    pub quantity: u32,
    pub item_seq_number: String,
    pub reservation_token: Option<String>,
    pub selected_services: Vec<String>,
    pub required_accessories: Vec<String>,
    pub is_trade_in: bool,
    pub is_leased: bool,
}

impl AvailabilityRequest {
    /// Builds the fixed-shape payload for one SKU at one zip code.
    #[must_use]
    pub fn new(sku: &str, zip_code: &str) -> Self {
        Self {
            zip_code: zip_code.to_owned(),
            show_on_shelf: true,
            lookup_in_store_quantity: false,
            xbox_all_access: false,
            consolidated: false,
            show_only_on_shelf: false,
            show_in_store: false,
            pickup_types: vec!["UPS_ACCESS_POINT", "FEDEX_HAL"],
            only_best_buy_locations: true,
            items: vec![RequestItem {
                sku: sku.to_owned(),
                condition: None,
                quantity: 1,
                item_seq_number: "1".to_owned(),
                reservation_token: None,
                selected_services: Vec::new(),
                required_accessories: Vec::new(),
                is_trade_in: false,
                is_leased: false,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_matches_remote_contract() {
        let request = AvailabilityRequest::new("6612728", "10001");
        let json = serde_json::to_value(&request).expect("serialize");

        assert_eq!(json["zipCode"], "10001");
        assert_eq!(json["showOnShelf"], true);
        assert_eq!(json["lookupInStoreQuantity"], false);
        assert_eq!(json["onlyBestBuyLocations"], true);
        assert_eq!(
            json["pickupTypes"],
            serde_json::json!(["UPS_ACCESS_POINT", "FEDEX_HAL"])
        );

        let items = json["items"].as_array().expect("items array");
        assert_eq!(items.len(), 1, "endpoint expects exactly one item");
        assert_eq!(items[0]["sku"], "6612728");
        assert_eq!(items[0]["quantity"], 1);
        assert_eq!(items[0]["itemSeqNumber"], "1");
        assert!(items[0]["condition"].is_null());
        assert!(items[0]["reservationToken"].is_null());
        assert_eq!(items[0]["isTradeIn"], false);
        assert_eq!(items[0]["isLeased"], false);
    }
}
