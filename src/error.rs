//! Error types for page-signals.
//!
//! Feature computation itself never fails for a well-formed tree; per-node and
//! per-category conditions degrade to safe defaults locally. The entry points
//! are fallible only for documents the caller handed over without a body.

/// Error type for feature extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The parsed document contains no body element to score.
    #[error("document has no body element")]
    MissingBody,
}

/// Result type alias for feature extraction.
pub type Result<T> = std::result::Result<T, Error>;
