// src/fetch/mod.rs

use crate::error::FetchError;
use reqwest::Client;
use std::{future::Future, time::Duration};
use tracing::debug;
use url::Url;

pub mod urls;

pub use urls::sheet_csv_url;

/// Something that can produce the raw CSV text for one refresh cycle.
pub trait Source: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Single GET against a fixed URL. No retries: a failed attempt is returned
/// to the caller, which waits for the next tick.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    /// Builds its own client with the given request timeout.
    pub fn with_timeout(url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client, url))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Source for HttpSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        let resp = self.client.get(self.url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = resp.text().await?;
        debug!(url = %self.url, bytes = body.len(), "fetched csv");
        Ok(body)
    }
}
