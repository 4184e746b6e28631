//! Codec between HTTP media type header values and PostgREST's media types.
//!
//! This crate provides:
//! - A closed [`MediaType`] model covering standard types, a passthrough
//!   fallback and the `vnd.pgrst` vendor types
//! - Total decoding of `Content-Type` / `Accept` values ([`decode_media_type`])
//! - Canonical encoding back to header bytes ([`to_mime`], [`to_content_type`])
//! - Query plan parameters: format and an ordered option set ([`plan`])
//!
//! Everything is a pure function over immutable values and is safe to call
//! from any number of threads.

pub mod config;
pub mod error;
pub mod grammar;
pub mod media_type;
pub mod plan;

// Re-export commonly used types
pub use config::{DecodeOptions, DEFAULT_MAX_DEPTH};
pub use error::{Error, Result};
pub use media_type::{
    decode_media_type, decode_media_type_with_options, to_content_type, to_mime, MediaType,
    CHARSET_UTF8, CONTENT_TYPE,
};
pub use plan::{PlanFormat, PlanOption, PlanOptions};
