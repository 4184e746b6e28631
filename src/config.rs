//! Decoder configuration.
//!
//! The plan media type embeds another media type in its `for=` parameter,
//! which the decoder handles by recursing. [`DecodeOptions`] bounds that
//! recursion.
//!
//! ## Examples
//!
//! ```rust
//! use pgrst_media::{decode_media_type_with_options, DecodeOptions, MediaType};
//!
//! let options = DecodeOptions::new().with_max_depth(0);
//! let mt = decode_media_type_with_options(
//!     "application/vnd.pgrst.plan;for=\"application/vnd.pgrst.plan\"",
//!     &options,
//! );
//! match mt {
//!     MediaType::VndPlan { inner, .. } => {
//!         assert_eq!(*inner, MediaType::Other("application/vnd.pgrst.plan".into()));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

/// Default limit on plan types nested through `for=` parameters.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Configuration options for media type decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Deepest nesting level at which a plan type is still recognized.
    ///
    /// The outermost media type sits at depth 0 and each `for=` adds one.
    /// A plan type found deeper than this decodes as `Other`.
    ///
    /// A `for=` value is cut at the first `;`, so it never carries a `for=`
    /// of its own and nesting stops at depth 1. Only `0` (reject a plan
    /// inside a plan) behaves differently from any larger value.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pgrst_media::{DecodeOptions, DEFAULT_MAX_DEPTH};
    ///
    /// assert_eq!(DecodeOptions::new().max_depth, DEFAULT_MAX_DEPTH);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nesting limit for plan types.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = DecodeOptions::default();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options, DecodeOptions::new());
    }

    #[test]
    fn test_with_max_depth() {
        let options = DecodeOptions::new().with_max_depth(2);
        assert_eq!(options.max_depth, 2);
    }

    #[test]
    fn test_nesting_stops_at_depth_one() {
        use crate::{decode_media_type_with_options, MediaType, PlanFormat, PlanOptions};

        let input = "application/vnd.pgrst.plan;for=\"application/vnd.pgrst.plan;for=\"application/vnd.pgrst.plan\"\"";
        let expected = MediaType::plan(
            MediaType::plan(MediaType::ApplicationJson, PlanFormat::Text, PlanOptions::new()),
            PlanFormat::Text,
            PlanOptions::new(),
        );
        for max_depth in [1, 2, DEFAULT_MAX_DEPTH] {
            let options = DecodeOptions::new().with_max_depth(max_depth);
            assert_eq!(decode_media_type_with_options(input, &options), expected);
        }
    }
}
