//! Data models for Finding service listings, search responses and errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One listing returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// eBay item id
    pub item_id: String,
    /// Listing title
    pub title: String,
    /// Seller location, e.g. "Saint Cloud,MN,USA"
    pub location: String,
    /// Current (or final, for completed listings) price
    pub current_price: f64,
    /// Currency of `current_price`
    pub currency: String,
    /// Shipping service cost, zero when not reported
    pub shipping_price: f64,
    /// Buy It Now price, zero when the listing has none
    pub bin_price: f64,
    /// Ship-to region codes as returned
    pub ships_to: Vec<String>,
    /// Listing page URL
    pub listing_url: String,
    /// Gallery image URL
    pub image_url: String,
    /// Marketplace the listing belongs to
    pub global_id: String,
    /// Listing end time
    pub end_time: Option<DateTime<Utc>>,
}

impl Item {
    /// Returns current price plus shipping.
    pub fn total_price(&self) -> f64 {
        self.current_price + self.shipping_price
    }

    /// Returns true if the listing offers Buy It Now.
    pub fn has_buy_it_now(&self) -> bool {
        self.bin_price > 0.0
    }
}

/// Result of a single search call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Items in the order the service returned them
    pub items: Vec<Item>,
    /// Server timestamp, unparsed
    pub timestamp: String,
    /// Acknowledgement value ("Success", "Warning", ...)
    pub ack: String,
    /// Total matching entries across all pages, if reported
    pub total_entries: Option<u32>,
}

impl SearchResponse {
    /// Returns number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items were found.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prints the response to stdout for debugging.
    pub fn dump(&self) {
        println!("{}", crate::format::dump(self));
    }
}

/// Error payload returned by the service on a non-200 response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(default)]
    pub error_id: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub subdomain: String,
}
