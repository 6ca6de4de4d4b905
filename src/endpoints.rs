//! URL construction for every route the API exposes.
//!
//! Every function here is pure: base origin in, URL string out. Trend names
//! must already be percent-encoded by the caller; `TrendsClient` does that
//! before reaching in here, so a raw name never ends up in a URL.

/// Appends `?max_id=<cursor>` when a pagination cursor is present.
///
/// Cursor tokens are issued by the server and are already URL-safe, so they
/// are inserted verbatim. No cursor means "first page".
fn with_max_id(path: String, max_id: Option<&str>) -> String {
    match max_id {
        Some(cursor) => format!("{path}?max_id={cursor}"),
        None => path,
    }
}

pub fn all_trends(base: &str) -> String {
    format!("{base}/alltrends")
}

pub fn all_trends_tweets(base: &str, max_id: Option<&str>) -> String {
    with_max_id(format!("{base}/alltrends/tweets"), max_id)
}

pub fn all_trends_articles(base: &str, max_id: Option<&str>) -> String {
    with_max_id(format!("{base}/alltrends/articles"), max_id)
}

pub fn trend(base: &str, name: &str) -> String {
    format!("{base}/trend/{name}")
}

pub fn trend_tweets(base: &str, name: &str, max_id: Option<&str>) -> String {
    with_max_id(format!("{base}/trend/{name}/tweets"), max_id)
}

pub fn trend_articles(base: &str, name: &str, max_id: Option<&str>) -> String {
    with_max_id(format!("{base}/trend/{name}/articles"), max_id)
}
