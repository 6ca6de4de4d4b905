//! Typed client facade for a trending-topics REST API.
//!
//! The API serves trending topics plus the tweets and articles behind them,
//! with `max_id` cursor pagination on the content lists. This crate covers
//! the fetch side only: building the endpoint URL, dispatching the request,
//! decoding the JSON body, and wrapping it into domain objects. Rendering,
//! retries, and caching are the consumer's business.
//!
//! ```no_run
//! use trendfeed::TrendsClient;
//!
//! # async fn demo() -> trendfeed::Result<()> {
//! let client = TrendsClient::new("http://api.example.com/v1");
//! let all = client.all_trends().await?;
//! for trend in &all.trends {
//!     println!("{} ({:+.2})", trend.name, trend.sentiment);
//! }
//!
//! // Content lists page backwards via the previous page's cursor.
//! let page = client.trend_tweets("#WorldCup", None).await?;
//! let older = client
//!     .trend_tweets("#WorldCup", page.next_max_id())
//!     .await?;
//! # let _ = older;
//! # Ok(())
//! # }
//! ```
//!
//! Construct with [`TrendsClient::fixture`] to answer every call from
//! embedded sample data instead of the network, or
//! [`TrendsClient::with_transport`] to plug in your own response source.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod fixture;
pub mod model;
pub mod transport;

pub use client::TrendsClient;
pub use error::Error;
pub use fixture::FixtureTransport;
pub use model::{AllTrends, Article, Trend, Tweet};
pub use transport::{HttpTransport, Transport};

pub type Result<T> = std::result::Result<T, Error>;
