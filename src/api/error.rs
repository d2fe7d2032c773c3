use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("bad continuation link: {0}")]
    BadLink(#[from] url::ParseError),

    /// The API answered, but reported an error of its own.
    #[error("{0}")]
    Api(String),
}
