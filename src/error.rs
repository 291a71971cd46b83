use thiserror::Error;

/// Errors a fetch-and-extract run can fail with.
///
/// Every variant renders to a single-line message; the binary folds any of
/// them into the `{"error": ...}` report on stderr.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure: DNS, refused connection, timeout, or a
    /// non-success HTTP status.
    #[error("fetch failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid UTF-8.
    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The page URL could not be parsed as a base for link resolution.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
