//! Search command implementation.

use crate::config::Config;
use crate::ebay::{Session, WreqTransport};
use crate::format::Formatter;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Which listings a search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Active listings (`findItemsByKeywords`)
    Active,
    /// Completed listings that sold (`findCompletedItems`)
    Sold,
}

/// Executes a keyword search.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds a session from the configuration and runs the search.
    pub async fn execute(&self, kind: SearchKind, keywords: &str) -> Result<String> {
        let app_id = self
            .config
            .app_id
            .as_deref()
            .context("No application id configured. Pass --app-id or set EBAY_APP_ID")?;

        let transport = WreqTransport::with_options(self.config.proxy.as_deref(), self.config.timeout())
            .context("Failed to create HTTP client")?;
        let session = Session::with_transport(app_id, Arc::new(transport));

        self.execute_with_session(&session, kind, keywords).await
    }

    /// Runs the search with a provided session (for testing).
    pub async fn execute_with_session(
        &self,
        session: &Session,
        kind: SearchKind,
        keywords: &str,
    ) -> Result<String> {
        let global_id = self.config.marketplace.global_id();
        let page_size = self.config.page_size;

        let response = match kind {
            SearchKind::Active => session.find_items_by_keywords(global_id, keywords, page_size).await,
            SearchKind::Sold => session.find_sold_items(global_id, keywords, page_size).await,
        }
        .with_context(|| format!("Search for '{}' on {} failed", keywords, global_id))?;

        info!("Found {} items", response.count());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_response(&response))
    }
}
