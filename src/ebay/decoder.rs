//! XML decoding of Finding service responses.
//!
//! A 200 response is decoded as a search result; anything else is decoded as
//! an `errorMessage` payload. Root element names, unmodeled elements and
//! attributes are ignored.

use crate::ebay::error::{Error, Result};
use crate::ebay::models::{ApiError, Item, SearchResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, trace, warn};

const DEFAULT_CURRENCY: &str = "USD";

/// Decodes a raw response into a `SearchResponse` or an error.
pub fn decode_response(status: u16, body: &[u8]) -> Result<SearchResponse> {
    if status != 200 {
        let mut envelope: ErrorMessageXml = quick_xml::de::from_reader(body)?;
        let count = envelope.errors.len();

        // The service may report several errors; the last one is surfaced.
        let error = envelope.errors.pop().ok_or_else(|| {
            Error::Decode(quick_xml::DeError::Custom("missing field `error`".to_string()))
        })?;

        warn!(
            error_id = %error.error_id,
            status,
            count,
            "Service returned an error: {}",
            error.message
        );
        return Err(Error::Api(error));
    }

    let envelope: FindItemsXml = quick_xml::de::from_reader(body)?;
    let response = SearchResponse::from(envelope);

    debug!("Decoded {} items (ack: {})", response.count(), response.ack);

    Ok(response)
}

#[derive(Debug, Deserialize)]
struct ErrorMessageXml {
    #[serde(rename = "error", default)]
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FindItemsXml {
    #[serde(default)]
    ack: String,
    #[serde(default)]
    timestamp: String,
    #[serde(default)]
    search_result: SearchResultXml,
    #[serde(default)]
    pagination_output: Option<PaginationXml>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResultXml {
    #[serde(rename = "item", default)]
    items: Vec<ItemXml>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaginationXml {
    #[serde(default)]
    total_entries: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemXml {
    item_id: String,
    title: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    selling_status: SellingStatusXml,
    #[serde(default)]
    shipping_info: ShippingInfoXml,
    #[serde(default)]
    listing_info: ListingInfoXml,
    #[serde(rename = "viewItemURL", default)]
    view_item_url: String,
    #[serde(rename = "galleryURL", default)]
    gallery_url: String,
    #[serde(default)]
    global_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SellingStatusXml {
    #[serde(default)]
    current_price: Option<AmountXml>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShippingInfoXml {
    #[serde(default)]
    shipping_service_cost: Option<AmountXml>,
    #[serde(default)]
    ship_to_locations: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingInfoXml {
    #[serde(default)]
    buy_it_now_price: Option<AmountXml>,
    #[serde(default)]
    end_time: Option<DateTime<Utc>>,
}

/// `<currentPrice currencyId="USD">25.0</currentPrice>`
#[derive(Debug, Deserialize)]
struct AmountXml {
    #[serde(rename = "@currencyId", default)]
    currency_id: Option<String>,
    #[serde(rename = "$text", default)]
    value: f64,
}

fn amount(value: &Option<AmountXml>) -> f64 {
    value.as_ref().map(|a| a.value).unwrap_or(0.0)
}

impl From<ItemXml> for Item {
    fn from(xml: ItemXml) -> Self {
        let current_price = amount(&xml.selling_status.current_price);
        let shipping_price = amount(&xml.shipping_info.shipping_service_cost);
        let bin_price = amount(&xml.listing_info.buy_it_now_price);
        let currency = xml
            .selling_status
            .current_price
            .and_then(|a| a.currency_id)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Item {
            item_id: xml.item_id,
            title: xml.title,
            location: xml.location,
            current_price,
            currency,
            shipping_price,
            bin_price,
            ships_to: xml.shipping_info.ship_to_locations,
            listing_url: xml.view_item_url,
            image_url: xml.gallery_url,
            global_id: xml.global_id,
            end_time: xml.listing_info.end_time,
        }
    }
}

impl From<FindItemsXml> for SearchResponse {
    fn from(xml: FindItemsXml) -> Self {
        let items = xml
            .search_result
            .items
            .into_iter()
            .map(|item| {
                trace!("Decoded item: {} - {}", item.item_id, item.title);
                Item::from(item)
            })
            .collect();

        SearchResponse {
            items,
            timestamp: xml.timestamp,
            ack: xml.ack,
            total_entries: xml.pagination_output.and_then(|p| p.total_entries),
        }
    }
}
