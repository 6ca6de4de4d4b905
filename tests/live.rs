//! End-to-end tests over real HTTP.
//!
//! Each test starts an in-process server on an ephemeral port and drives the
//! live client against it, so the whole chain is exercised the way production
//! runs it: URL construction, the reqwest transport, status handling, and
//! JSON decoding. Handlers echo back what actually arrived (decoded path
//! segments, `max_id` query values) so assertions see the server's view of
//! the request rather than the client's.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use trendfeed::{Error, TrendsClient};

fn app() -> Router {
    Router::new()
        .route("/v1/alltrends", get(all_trends))
        .route("/v1/alltrends/tweets", get(content_tweets))
        .route("/v1/alltrends/articles", get(content_articles))
        .route("/v1/trend/{name}", get(trend))
        .route("/v1/trend/{name}/tweets", get(trend_tweets))
        .route("/v1/trend/{name}/articles", get(trend_articles))
}

async fn all_trends() -> Json<serde_json::Value> {
    Json(json!({"trends": [
        {"id": 1, "name": "#WorldCup", "sentiment": 0.62},
        {"id": 2, "name": "rustlang"}
    ]}))
}

// The cursor comes back as the id of the page's only item, so tests can
// assert exactly what reached the server in the query string.
fn tweets_page(max_id: Option<&str>) -> serde_json::Value {
    json!({"tweets": [{
        "id": max_id.unwrap_or("first-page"),
        "user": "server",
        "text": "echo",
        "timestamp": 1766044800_i64
    }]})
}

fn articles_page(max_id: Option<&str>) -> serde_json::Value {
    json!({"articles": [{
        "id": max_id.unwrap_or("first-page"),
        "title": "echo",
        "url": "http://news.test/echo",
        "source": "server",
        "timestamp": 1766040000_i64
    }]})
}

async fn content_tweets(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    Json(tweets_page(params.get("max_id").map(String::as_str)))
}

async fn content_articles(
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    Json(articles_page(params.get("max_id").map(String::as_str)))
}

/// Echoes the (percent-decoded) path segment back as the trend name. Two
/// magic names simulate failure modes: "down" answers 503, "garbled" answers
/// 200 with an HTML body.
async fn trend(Path(name): Path<String>) -> Response {
    match name.as_str() {
        "down" => (StatusCode::SERVICE_UNAVAILABLE, "upstream down").into_response(),
        "garbled" => "<html>service error page</html>".into_response(),
        _ => Json(json!({"id": 7, "name": name})).into_response(),
    }
}

async fn trend_tweets(
    Path(_name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    Json(tweets_page(params.get("max_id").map(String::as_str)))
}

async fn trend_articles(
    Path(_name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    Json(articles_page(params.get("max_id").map(String::as_str)))
}

/// Starts the server on an ephemeral port and returns the base URL to point
/// the client at.
async fn serve() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    format!("http://{addr}/v1")
}

#[tokio::test]
async fn test_all_trends_end_to_end() {
    let client = TrendsClient::new(&serve().await);

    let all = client.all_trends().await.unwrap();
    assert_eq!(all.trends.len(), 2);
    assert_eq!(all.trends[0].name, "#WorldCup");
    assert_eq!(all.trends[0].sentiment, 0.62);
    // Absent on the wire, normalized by the wrapper.
    assert_eq!(all.trends[1].sentiment, 0.0);
}

#[tokio::test]
async fn test_trend_name_arrives_decoded_at_the_server() {
    let client = TrendsClient::new(&serve().await);

    // Goes out as /trend/foo%20bar%2Fbaz; the handler sees the raw name.
    let trend = client.trend("foo bar/baz").await.unwrap();
    assert_eq!(trend.name, "foo bar/baz");
}

#[tokio::test]
async fn test_hashtag_name_fetches_end_to_end() {
    let client = TrendsClient::new(&serve().await);

    // Unencoded '#' would start a fragment and never reach the route.
    let trend = client.trend("#WorldCup").await.unwrap();
    assert_eq!(trend.id, 7);
    assert_eq!(trend.name, "#WorldCup");
}

#[tokio::test]
async fn test_cursor_arrives_as_max_id_query_parameter() {
    let client = TrendsClient::new(&serve().await);

    let page = client.all_trends_tweets(Some("555")).await.unwrap();
    assert_eq!(page.tweets[0].id, "555");

    let page = client.all_trends_tweets(None).await.unwrap();
    assert_eq!(page.tweets[0].id, "first-page");
}

#[tokio::test]
async fn test_named_trend_content_routes_end_to_end() {
    let client = TrendsClient::new(&serve().await);

    let tweets = client.trend_tweets("#WorldCup", Some("321")).await.unwrap();
    assert_eq!(tweets.tweets[0].id, "321");

    let articles = client.trend_articles("#WorldCup", None).await.unwrap();
    assert_eq!(articles.articles[0].id, "first-page");

    let articles = client.all_trends_articles(Some("99")).await.unwrap();
    assert_eq!(articles.articles[0].id, "99");
}

#[tokio::test]
async fn test_non_2xx_status_is_a_transport_error() {
    let client = TrendsClient::new(&serve().await);

    let err = client.trend("down").await.unwrap_err();
    match err {
        Error::Transport(msg) => assert!(msg.contains("503"), "missing status in: {msg}"),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_html_error_page_is_a_decode_error() {
    let client = TrendsClient::new(&serve().await);

    let err = client.trend("garbled").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_a_transport_error() {
    // Bind then drop a listener so the port is known to be dead.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TrendsClient::new(&format!("http://{addr}/v1"));
    let err = client.all_trends().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_concurrent_calls_complete_independently() {
    let client = TrendsClient::new(&serve().await);

    let (all, tweets, articles) = futures::join!(
        client.all_trends(),
        client.all_trends_tweets(None),
        client.all_trends_articles(Some("7")),
    );
    assert_eq!(all.unwrap().trends.len(), 2);
    assert_eq!(tweets.unwrap().tweets[0].id, "first-page");
    assert_eq!(articles.unwrap().articles[0].id, "7");
}
