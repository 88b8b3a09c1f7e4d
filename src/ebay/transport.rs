//! HTTP transport for Finding service requests.
//!
//! `Transport` is the seam a `Session` talks through. `WreqTransport` is the
//! default; tests and callers with special routing needs supply their own.

use crate::ebay::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;
use wreq::Client;

/// User-Agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_7_3) AppleWebKit/535.11 (KHTML, like Gecko) Chrome/17.0.963.56 Safari/535.11";

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes GET requests - enables mocking for tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a GET and returns the status and raw body, whatever the status.
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse>;
}

/// Default transport backed by a `wreq` client.
pub struct WreqTransport {
    client: Client,
}

impl WreqTransport {
    /// Creates a transport with the client's default settings.
    pub fn new() -> Result<Self> {
        Self::with_options(None, None)
    }

    /// Creates a transport with an optional proxy and request timeout.
    pub fn with_options(proxy: Option<&str>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(proxy_url) = proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).map_err(|e| Error::Transport(Box::new(e)))?;
            builder = builder.proxy(proxy);
        }

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| Error::Transport(Box::new(e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for WreqTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(|e| Error::Transport(Box::new(e)))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| Error::Body(Box::new(e)))?;

        Ok(RawResponse { status, body: body.to_vec() })
    }
}

/// Issues a single GET for `url` with the fixed User-Agent.
pub async fn get(transport: &dyn Transport, url: &Url) -> Result<RawResponse> {
    debug!("GET {}", url);

    let response = transport.get(url.as_str(), &[("User-Agent", USER_AGENT)]).await?;

    debug!("Response status: {} ({} bytes)", response.status, response.body.len());

    Ok(response)
}
