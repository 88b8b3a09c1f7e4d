//! ebay-finder - eBay Finding service client
//!
//! Builds Finding service requests for keyword and sold-item searches,
//! sends them through a swappable transport, and decodes the XML
//! responses into typed records.

pub mod commands;
pub mod config;
pub mod ebay;
pub mod format;

pub use config::Config;
pub use ebay::{
    ApiError, Error, Item, Marketplace, SearchResponse, Session, Transport, GLOBAL_ID_EBAY_DE,
    GLOBAL_ID_EBAY_ES, GLOBAL_ID_EBAY_FR, GLOBAL_ID_EBAY_IT, GLOBAL_ID_EBAY_US,
};
