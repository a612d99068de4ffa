//! Flattens the nested availability response into offer lists.
//!
//! The response carries two parallel arrays under `ispu`: a location table
//! and per-item availability entries that reference locations by id. The
//! join is deliberately lossy: an entry whose `locationId` is missing from
//! the table contributes nothing. That is documented policy, not a bug —
//! the remote service occasionally references locations it did not send.

use std::collections::HashMap;

use crate::response::{value_as_string, IspuLocation, StoreAvailabilityResponse};
use crate::types::{AvailabilityResult, PickupOffer, ShipToStoreOffer, StoreRecord};

/// Flattens a parsed response into pickup and ship-to-store offer lists.
///
/// A response without the `ispu` section yields an empty result with no
/// error — the remote API legitimately returns no data for some SKUs/zips.
#[must_use]
pub fn flatten_availability(response: &StoreAvailabilityResponse) -> AvailabilityResult {
    let Some(ispu) = &response.ispu else {
        return AvailabilityResult::empty();
    };

    let stores: HashMap<String, StoreRecord> = ispu
        .locations
        .iter()
        .filter_map(store_record)
        .map(|record| (record.id.clone(), record))
        .collect();

    let mut result = AvailabilityResult::empty();

    for item in &ispu.items {
        for entry in &item.locations {
            let Some(location_id) = value_as_string(&entry.location_id) else {
                continue;
            };
            // Lossy join: unknown location ids are silently dropped.
            let Some(store) = stores.get(&location_id) else {
                continue;
            };
            let Some(availability) = &entry.availability else {
                continue;
            };

            match availability.fulfillment_type.as_deref() {
                Some("PICKUP") => {
                    let quantity = availability.available_pickup_quantity.unwrap_or(0);
                    if quantity > 0 {
                        result.pickup_stores.push(PickupOffer {
                            store: store.clone(),
                            quantity,
                            available_date: availability
                                .min_date
                                .clone()
                                .unwrap_or_else(|| "Today".to_string()),
                        });
                    }
                }
                Some("SHIP_TO_LOCATION") => {
                    result.ship_stores.push(ShipToStoreOffer {
                        store: store.clone(),
                        service_level: availability
                            .service_level
                            .clone()
                            .unwrap_or_else(|| "Unknown".to_string()),
                        min_date: availability.min_date.clone(),
                        max_date: availability.max_date.clone(),
                    });
                }
                // Unknown or absent fulfillment types are ignored.
                _ => {}
            }
        }
    }

    result
}

/// Converts a wire location into a [`StoreRecord`].
///
/// Locations without a usable id or name cannot participate in the join and
/// are skipped; entries referencing them then fall under the lossy-join
/// policy above.
fn store_record(location: &IspuLocation) -> Option<StoreRecord> {
    let id = value_as_string(&location.id)?;
    let name = location
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())?
        .to_string();

    Some(StoreRecord {
        id,
        name,
        city: location.city.clone().unwrap_or_default(),
        state: location.state.clone().unwrap_or_default(),
        address: location
            .address
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
        distance: value_as_string(&location.distance).unwrap_or_else(|| "N/A".to_string()),
    })
}
