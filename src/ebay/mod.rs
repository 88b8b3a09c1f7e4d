//! eBay Finding service client: request building, transport, decoding and sessions.

pub mod decoder;
pub mod error;
pub mod marketplace;
pub mod models;
pub mod request;
pub mod session;
pub mod transport;

pub use error::{Error, Result};
pub use marketplace::{
    Marketplace, GLOBAL_ID_EBAY_DE, GLOBAL_ID_EBAY_ES, GLOBAL_ID_EBAY_FR, GLOBAL_ID_EBAY_IT,
    GLOBAL_ID_EBAY_US,
};
pub use models::{ApiError, Item, SearchResponse};
pub use session::Session;
pub use transport::{RawResponse, Transport, WreqTransport};
