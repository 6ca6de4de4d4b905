//! Where response bodies come from: the live network or canned fixtures.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::Error;
use crate::Result;

/// Source of raw response bodies for resolved endpoint URLs.
///
/// [`TrendsClient`](crate::TrendsClient) talks to the API exclusively
/// through this seam, so swapping the live transport for the fixture one (or
/// a test double) is a construction-time choice that changes behavior for
/// every operation at once. Implementations return the body as text; the
/// client owns JSON decoding so both sources go through the identical path.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the body behind `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Live transport: one HTTP GET per fetch.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .user_agent(concat!("trendfeed/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Transport(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        Ok(response.text().await?)
    }
}
