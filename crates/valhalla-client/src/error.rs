use thiserror::Error;

/// Convenient result alias for the Valhalla client library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level client error type.
///
/// Every failure of an outbound call maps onto exactly one of the first
/// three variants so callers can decide how to surface it. None of these
/// are retried by the client.
#[derive(Debug, Error)]
pub enum Error {
    /// The outbound call never completed (connection refused, DNS failure,
    /// timeout).
    #[error("valhalla backend unreachable at {url}: {source}")]
    BackendUnavailable {
        url: String,
        source: reqwest::Error,
    },

    /// The backend answered with a status outside the 2xx range. Carries the
    /// status and the response body text for diagnostics.
    #[error("valhalla backend returned {status}: {body}")]
    BackendStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The backend answered 2xx but the body could not be decoded as JSON.
    #[error("failed to decode valhalla response: {source}")]
    MalformedResponse { source: reqwest::Error },

    /// Building the underlying HTTP client failed.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
