/// Failure reported by any fetch operation.
///
/// There are only two buckets: the request never produced a usable body, or
/// the body arrived but was not the JSON the endpoint promises. The client
/// does not classify further and never retries; whatever the transport or
/// decode step produced is handed straight back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection refused, DNS failure, timeout, or a non-2xx status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not valid JSON, or not the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}
