//! Failure classification for backend requests.
//!
//! ERROR HANDLING
//! ==============
//! Variants exist for logging only. Views collapse every variant into a
//! single "request failed" notice and never branch on the kind.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every [`AuthApi`](super::api::AuthApi) call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The body of a 2xx response did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// HTTP is only wired up in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the backend itself rejected the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Status(_))
    }
}
