//! Request URL construction for the Finding service.

use crate::ebay::error::Result;
use url::Url;

/// Finding service endpoint.
pub const FINDING_SERVICE_URL: &str = "http://svcs.ebay.com/services/search/FindingService/v1";

/// Finding service version sent with every request.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Finding service operations supported by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Active listings matching keywords.
    FindItemsByKeywords,
    /// Completed listings matching keywords.
    FindCompletedItems,
}

impl Operation {
    /// Returns the `OPERATION-NAME` value.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::FindItemsByKeywords => "findItemsByKeywords",
            Operation::FindCompletedItems => "findCompletedItems",
        }
    }
}

/// A named `itemFilter` with one or more values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFilter {
    pub name: &'static str,
    pub values: Vec<&'static str>,
}

impl ItemFilter {
    pub fn new(name: &'static str, values: &[&'static str]) -> Self {
        Self { name, values: values.to_vec() }
    }

    /// Expands this filter into `itemFilter(i).name` / `itemFilter(i).value(j)` pairs.
    fn query_pairs(&self, index: usize) -> Vec<(String, &'static str)> {
        let mut pairs = vec![(format!("itemFilter({index}).name"), self.name)];
        pairs.extend(
            self.values
                .iter()
                .enumerate()
                .map(|(j, value)| (format!("itemFilter({index}).value({j})"), *value)),
        );
        pairs
    }
}

/// Filters for an active-listing search: any sellable listing type.
pub fn search_filters() -> Vec<ItemFilter> {
    vec![ItemFilter::new("ListingType", &["FixedPrice", "AuctionWithBIN", "Auction"])]
}

/// Filters for a sold-items search: used or unspecified condition, sold only.
pub fn sold_filters() -> Vec<ItemFilter> {
    vec![
        ItemFilter::new("Condition", &["Used", "Unspecified"]),
        ItemFilter::new("SoldItemsOnly", &["true"]),
    ]
}

/// Builds a fully encoded Finding service URL.
pub fn build_url(
    app_id: &str,
    global_id: &str,
    keywords: &str,
    operation: Operation,
    page_size: u32,
    filters: &[ItemFilter],
) -> Result<Url> {
    let mut url = Url::parse(FINDING_SERVICE_URL)?;

    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("OPERATION-NAME", operation.name())
            .append_pair("SERVICE-VERSION", SERVICE_VERSION)
            .append_pair("SECURITY-APPNAME", app_id)
            .append_pair("GLOBAL-ID", global_id)
            .append_pair("RESPONSE-DATA-FORMAT", "XML")
            .append_pair("REST-PAYLOAD", "")
            .append_pair("keywords", keywords)
            .append_pair("paginationInput.entriesPerPage", &page_size.to_string());

        for (index, filter) in filters.iter().enumerate() {
            for (key, value) in filter.query_pairs(index) {
                query.append_pair(&key, value);
            }
        }
    }

    Ok(url)
}

/// Builds a `findItemsByKeywords` URL.
pub fn build_search_url(
    app_id: &str,
    global_id: &str,
    keywords: &str,
    page_size: u32,
) -> Result<Url> {
    build_url(app_id, global_id, keywords, Operation::FindItemsByKeywords, page_size, &search_filters())
}

/// Builds a `findCompletedItems` URL restricted to sold items.
pub fn build_sold_url(app_id: &str, global_id: &str, keywords: &str, page_size: u32) -> Result<Url> {
    build_url(app_id, global_id, keywords, Operation::FindCompletedItems, page_size, &sold_filters())
}
