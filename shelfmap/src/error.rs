//! Errors raised while loading map metadata.
//!
//! None of these ever reach the user: the controller logs them and falls back
//! to the default view box with no sections.

/// Failure to obtain usable map metadata from the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("map metadata request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success HTTP status.
    #[error("map metadata request returned status {0}")]
    Status(u16),
    /// The response body was not a valid map metadata document.
    #[error("malformed map metadata: {0}")]
    Decode(String),
}
