//! Wire packets and the domain objects built from them.
//!
//! A packet mirrors one endpoint's JSON body exactly and lives only for the
//! duration of a decode. Domain objects (`AllTrends`, `Trend`, `Tweet`,
//! `Article`) are built from exactly one packet via `From`, normalize the
//! raw fields, and are plain owned values after that.
//!
//! Content-list packets (`ContentTweetsPacket`, `ContentArticlesPacket`) are
//! handed to callers as-is rather than wrapped: the raw page is what carries
//! the implicit pagination cursor (see [`ContentTweetsPacket::next_max_id`]),
//! and item-level wrapping is the consumer's call, one element at a time.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One trending topic as the server reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendPacket {
    pub id: i64,
    pub name: String,
    pub sentiment: Option<f64>,
}

/// Body of `GET /alltrends`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AllTrendsPacket {
    pub trends: Vec<TrendPacket>,
}

/// One tweet as the server reports it. Ids travel as strings because they
/// overflow double-precision JSON numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TweetPacket {
    pub id: String,
    pub user: String,
    pub text: String,
    pub timestamp: i64,
}

/// Body of the `/tweets` endpoints: one page, newest first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentTweetsPacket {
    pub tweets: Vec<TweetPacket>,
}

/// One news article as the server reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArticlePacket {
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: String,
    pub timestamp: i64,
}

/// Body of the `/articles` endpoints: one page, newest first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentArticlesPacket {
    pub articles: Vec<ArticlePacket>,
}

impl ContentTweetsPacket {
    /// Cursor for the page after this one: the id of the oldest tweet in the
    /// page. `None` on an empty page, which has nothing older to ask for.
    pub fn next_max_id(&self) -> Option<&str> {
        self.tweets.last().map(|tweet| tweet.id.as_str())
    }
}

impl ContentArticlesPacket {
    /// Cursor for the page after this one, same convention as tweets.
    pub fn next_max_id(&self) -> Option<&str> {
        self.articles.last().map(|article| article.id.as_str())
    }
}

/// A trending topic in its stable public shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    pub id: i64,
    pub name: String,
    /// Aggregate sentiment in `[-1.0, 1.0]`; `0.0` when the server has not
    /// scored the trend yet.
    pub sentiment: f64,
}

/// Every currently-tracked trend.
#[derive(Debug, Clone, PartialEq)]
pub struct AllTrends {
    pub trends: Vec<Trend>,
}

/// A tweet with its id and timestamp normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Tweet {
    pub id: u64,
    pub user: String,
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

/// An article with its id and timestamp normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
}

impl From<TrendPacket> for Trend {
    fn from(packet: TrendPacket) -> Self {
        Trend {
            id: packet.id,
            name: packet.name,
            sentiment: packet.sentiment.unwrap_or(0.0),
        }
    }
}

impl From<AllTrendsPacket> for AllTrends {
    fn from(packet: AllTrendsPacket) -> Self {
        AllTrends {
            trends: packet.trends.into_iter().map(Trend::from).collect(),
        }
    }
}

// Wrapper construction is total: a well-formed packet converts losslessly,
// and a hostile one degrades to defaults instead of erroring.
impl From<TweetPacket> for Tweet {
    fn from(packet: TweetPacket) -> Self {
        Tweet {
            id: packet.id.parse().unwrap_or_default(),
            user: packet.user,
            text: packet.text,
            posted_at: DateTime::from_timestamp(packet.timestamp, 0)
                .unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

impl From<ArticlePacket> for Article {
    fn from(packet: ArticlePacket) -> Self {
        Article {
            id: packet.id.parse().unwrap_or_default(),
            title: packet.title,
            url: packet.url,
            source: packet.source,
            published_at: DateTime::from_timestamp(packet.timestamp, 0)
                .unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}
