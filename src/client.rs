//! The caller-facing facade: one typed async operation per API route.

use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;

use crate::endpoints;
use crate::fixture::FixtureTransport;
use crate::model::{
    AllTrends, AllTrendsPacket, ContentArticlesPacket, ContentTweetsPacket, Trend, TrendPacket,
};
use crate::transport::{HttpTransport, Transport};
use crate::Result;

/// Facade over the trends API: the single entry point for every fetch.
///
/// One method per route. The two singular lookups (`all_trends`, `trend`)
/// return wrapped domain objects; the four content-list operations return
/// their packets raw. The asymmetry is deliberate: the raw page is what
/// carries the implicit `max_id` cursor for fetching the next one, and
/// item-level wrapping ([`Tweet`](crate::model::Tweet),
/// [`Article`](crate::model::Article)) stays with the consumer.
///
/// Calls are independent: each builds its own URL and owns its own fetch, so
/// a client can be shared (`Clone` is cheap) and driven concurrently.
/// Concurrent operations resolve in I/O-completion order, not call order,
/// and each future reports exactly once: `Ok` with a decoded result or
/// `Err` with whatever the transport or decode step produced. No retries,
/// no caching.
#[derive(Clone)]
pub struct TrendsClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl TrendsClient {
    /// Live client against `base_url` (e.g. `http://api.example.com/v1`).
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }

    /// Client answering every call from embedded sample data. Never touches
    /// the network; useful for demos and offline development.
    pub fn fixture(base_url: &str) -> Self {
        Self::with_transport(base_url, FixtureTransport::new())
    }

    /// Client with a caller-supplied response source. This is the seam tests
    /// use to inject recording, counting, or failing transports.
    pub fn with_transport(base_url: &str, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport: Arc::new(transport),
        }
    }

    /// Fetches every currently-tracked trend.
    pub async fn all_trends(&self) -> Result<AllTrends> {
        let packet: AllTrendsPacket = self
            .fetch_json(endpoints::all_trends(&self.base_url))
            .await?;
        Ok(AllTrends::from(packet))
    }

    /// Fetches one page of tweets across all trends. Pass the previous
    /// page's cursor as `max_id` to get strictly older items; `None` means
    /// the first (newest) page.
    pub async fn all_trends_tweets(&self, max_id: Option<&str>) -> Result<ContentTweetsPacket> {
        self.fetch_json(endpoints::all_trends_tweets(&self.base_url, max_id))
            .await
    }

    /// Fetches one page of articles across all trends.
    pub async fn all_trends_articles(
        &self,
        max_id: Option<&str>,
    ) -> Result<ContentArticlesPacket> {
        self.fetch_json(endpoints::all_trends_articles(&self.base_url, max_id))
            .await
    }

    /// Fetches a single trend by name. Names go in raw ("#WorldCup",
    /// "foo bar") and are percent-encoded here before URL use.
    pub async fn trend(&self, name: &str) -> Result<Trend> {
        let name = urlencoding::encode(name);
        let packet: TrendPacket = self
            .fetch_json(endpoints::trend(&self.base_url, &name))
            .await?;
        Ok(Trend::from(packet))
    }

    /// Fetches one page of tweets for a named trend.
    pub async fn trend_tweets(
        &self,
        name: &str,
        max_id: Option<&str>,
    ) -> Result<ContentTweetsPacket> {
        let name = urlencoding::encode(name);
        self.fetch_json(endpoints::trend_tweets(&self.base_url, &name, max_id))
            .await
    }

    /// Fetches one page of articles for a named trend.
    pub async fn trend_articles(
        &self,
        name: &str,
        max_id: Option<&str>,
    ) -> Result<ContentArticlesPacket> {
        let name = urlencoding::encode(name);
        self.fetch_json(endpoints::trend_articles(&self.base_url, &name, max_id))
            .await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!("GET {url}");
        let body = self.transport.fetch(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
