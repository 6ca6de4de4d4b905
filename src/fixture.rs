//! Canned-data transport: the debug response source.
//!
//! Answers every route from embedded sample JSON without touching the
//! network, and without ever yielding: a fixture-backed fetch completes on
//! the first poll. Bodies still go through the client's normal decode path,
//! so the caller-facing contract is identical to the live transport's.

use async_trait::async_trait;

use crate::error::Error;
use crate::transport::Transport;
use crate::Result;

const SAMPLE_ALL_TRENDS: &str = r##"{"trends":[
  {"id":1,"name":"#WorldCup","sentiment":0.62},
  {"id":2,"name":"#Eurovision","sentiment":-0.18},
  {"id":3,"name":"rustlang","sentiment":0.91}
]}"##;

const SAMPLE_TREND: &str = r##"{"id":1,"name":"#WorldCup","sentiment":0.62}"##;

const SAMPLE_TWEETS: &str = r#"{"tweets":[
  {"id":"1009144269257129984","user":"FIFAWorldCup","text":"It's matchday!","timestamp":1766044800},
  {"id":"1009144269257129600","user":"espn","text":"Full time. What a finish.","timestamp":1766041200},
  {"id":"1009144269257129001","user":"fangirl42","text":"Can't believe that goal","timestamp":1766037600}
]}"#;

const SAMPLE_ARTICLES: &str = r#"{"articles":[
  {"id":"88342","title":"Five takeaways from the final","url":"https://news.test/takeaways","source":"News Test","timestamp":1766040000},
  {"id":"88341","title":"How the tournament was won","url":"https://news.test/won","source":"Daily Sport","timestamp":1766036400}
]}"#;

/// Transport that serves the embedded samples above for every route.
pub struct FixtureTransport;

impl FixtureTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FixtureTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a URL to its canned body by route shape, ignoring the query
/// string and whatever origin/prefix the base URL carries.
fn canned_body(url: &str) -> Option<&'static str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    // Named-trend routes first: a trend may itself be called "alltrends".
    match segments.as_slice() {
        [.., "trend", _, "tweets"] => Some(SAMPLE_TWEETS),
        [.., "trend", _, "articles"] => Some(SAMPLE_ARTICLES),
        [.., "trend", _] => Some(SAMPLE_TREND),
        [.., "alltrends", "tweets"] => Some(SAMPLE_TWEETS),
        [.., "alltrends", "articles"] => Some(SAMPLE_ARTICLES),
        [.., "alltrends"] => Some(SAMPLE_ALL_TRENDS),
        _ => None,
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn fetch(&self, url: &str) -> Result<String> {
        match canned_body(url) {
            Some(body) => Ok(body.to_string()),
            None => Err(Error::Transport(format!("no fixture for {url}"))),
        }
    }
}
