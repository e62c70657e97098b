// src/core/net.rs
//
// HTTP GET behind a small trait so adapters can be driven by fixtures.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// One blocking GET returning the body as text.
/// Implementations must be shareable across the aggregator's worker threads.
pub trait Fetch: Send + Sync {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Production transport: a reqwest blocking client with a fixed User-Agent.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Client defaults apply; no timeout beyond what reqwest sets.
    pub fn new() -> Result<Self, FetchError> {
        Self::build(None)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "GET");

        let transport = |source| FetchError::Transport { url: url.to_string(), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = resp.text().map_err(transport)?;
        debug!(url, bytes = body.len(), "GET ok");
        Ok(body)
    }
}
