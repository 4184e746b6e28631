//! Error types for the media type crate.
//!
//! Decoding a header value never fails; these errors only come out of the
//! strict `FromStr` parsers for plan formats and plan options.

use thiserror::Error;

/// The main error type for the media type crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Plan format other than `json` or `text`
    #[error("unknown plan format: {0}")]
    UnknownPlanFormat(String),

    /// Plan option outside the known set
    #[error("unknown plan option: {0}")]
    UnknownPlanOption(String),
}

/// Specialized Result type for media type operations.
pub type Result<T> = std::result::Result<T, Error>;
