//! Domain types produced by flattening the store-availability response.
//!
//! All of these are created and discarded within a single request/response
//! cycle; nothing is persisted. Serialized field names (`pickup_stores`,
//! `ship_stores`, `error`) are the JSON contract the web form consumes.

use serde::{Deserialize, Serialize};

/// One physical store location from the availability response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    /// Location identifier, unique within one response.
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    /// Street address; `"N/A"` when the wire omits it.
    pub address: String,
    /// Distance from the queried zip code, as reported by the remote
    /// service; `"N/A"` when omitted.
    pub distance: String,
}

/// A store where the item can be picked up right now.
///
/// Only emitted for `PICKUP` entries with a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupOffer {
    #[serde(flatten)]
    pub store: StoreRecord,
    /// Units on hand. The remote service reports `9999` for "high stock".
    pub quantity: u32,
    /// Earliest pickup date; `"Today"` when the wire omits it.
    pub available_date: String,
}

/// A store that can have the item shipped to it for pickup.
///
/// Emitted for every `SHIP_TO_LOCATION` entry — this option exists even when
/// in-store pickup shows out of stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipToStoreOffer {
    #[serde(flatten)]
    pub store: StoreRecord,
    /// Shipping service level; `"Unknown"` when the wire omits it.
    pub service_level: String,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
}

/// The outcome of one availability check for one SKU.
///
/// Failures are carried in `error` rather than as a separate channel so the
/// web form and CLI always get a uniformly-shaped value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub pickup_stores: Vec<PickupOffer>,
    pub ship_stores: Vec<ShipToStoreOffer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AvailabilityResult {
    /// A successful result with no offers — the remote API legitimately
    /// returns no data for some SKU/zip combinations.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A terminal failure, carried as data so callers never have to handle a
    /// separate error channel.
    #[must_use]
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            pickup_stores: Vec::new(),
            ship_stores: Vec::new(),
            error: Some(message.into()),
        }
    }
}
