//! Finding service session: the public search operations.

use crate::ebay::decoder::decode_response;
use crate::ebay::error::Result;
use crate::ebay::models::SearchResponse;
use crate::ebay::request::{build_search_url, build_sold_url};
use crate::ebay::transport::{self, Transport, WreqTransport};
use std::fmt;
use std::sync::Arc;
use tracing::info;
use url::Url;

/// A search session bound to one application id.
///
/// Holds no mutable state; each call is one request and one decoded
/// response. Clones share the same transport.
#[derive(Clone)]
pub struct Session {
    app_id: String,
    transport: Arc<dyn Transport>,
}

impl Session {
    /// Creates a session using the default HTTP transport.
    pub fn new(app_id: impl Into<String>) -> Result<Self> {
        Ok(Self::with_transport(app_id, Arc::new(WreqTransport::new()?)))
    }

    /// Creates a session that sends requests through `transport`.
    pub fn with_transport(app_id: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self { app_id: app_id.into(), transport }
    }

    /// Returns the application id sent as `SECURITY-APPNAME`.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Searches active listings by keywords.
    pub async fn find_items_by_keywords(
        &self,
        global_id: &str,
        keywords: &str,
        page_size: u32,
    ) -> Result<SearchResponse> {
        info!("Searching {}: {} ({} per page)", global_id, keywords, page_size);

        let url = build_search_url(&self.app_id, global_id, keywords, page_size)?;
        self.find_items(&url).await
    }

    /// Searches completed listings that sold, by keywords.
    pub async fn find_sold_items(
        &self,
        global_id: &str,
        keywords: &str,
        page_size: u32,
    ) -> Result<SearchResponse> {
        info!("Searching sold items on {}: {} ({} per page)", global_id, keywords, page_size);

        let url = build_sold_url(&self.app_id, global_id, keywords, page_size)?;
        self.find_items(&url).await
    }

    async fn find_items(&self, url: &Url) -> Result<SearchResponse> {
        let response = transport::get(self.transport.as_ref(), url).await?;
        decode_response(response.status, &response.body)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("app_id", &self.app_id).finish_non_exhaustive()
    }
}
