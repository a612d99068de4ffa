pub mod checker;
pub mod client;
pub mod error;
pub mod parse;
pub mod request;
pub mod response;
pub mod retry;
pub mod types;

pub use checker::StockChecker;
pub use client::AvailabilityClient;
pub use error::FulfillmentError;
pub use parse::flatten_availability;
pub use retry::RetryPolicy;
pub use types::{AvailabilityResult, PickupOffer, ShipToStoreOffer, StoreRecord};
