//! Media type decoding and encoding.
//!
//! Maps raw `Content-Type` / `Accept` header values onto [`MediaType`] and
//! back. Decoding is total: unknown base types are kept verbatim as
//! [`MediaType::Other`] and unexpected parameters fall back to the unflagged
//! variant, so a malformed header never turns into an error here.

use crate::config::DecodeOptions;
use crate::grammar::{find_param, is_exact_param, split_media_type, unquote};
use crate::plan::{PlanFormat, PlanOption, PlanOptions};
use bytes::{BufMut, Bytes, BytesMut};
use std::fmt;
use tracing::{debug, trace};

/// Header name produced by [`to_content_type`].
pub const CONTENT_TYPE: &str = "Content-Type";

/// Suffix appended to textual media types in a `Content-Type` header.
pub const CHARSET_UTF8: &str = "; charset=utf-8";

const NULLS_STRIPPED: &str = "nulls=stripped";

/// A media type understood by the API server.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `application/json`
    ApplicationJson,
    /// `application/geo+json`
    GeoJson,
    /// `text/csv`
    TextCsv,
    /// `text/plain`
    TextPlain,
    /// `text/xml`
    TextXml,
    /// `application/openapi+json`
    OpenApi,
    /// `application/x-www-form-urlencoded`
    UrlEncoded,
    /// `application/octet-stream`
    OctetStream,
    /// `*/*`
    Any,
    /// An unrecognized base type, kept exactly as received.
    Other(Bytes),
    /// `application/vnd.pgrst.array+json;nulls=stripped`
    VndArrayJsonStrip,
    /// `application/vnd.pgrst.object+json`, optionally with `nulls=stripped`.
    VndSingularJson { strip_nulls: bool },
    /// `application/vnd.pgrst.plan+<format>`, a query plan of a request
    /// that would otherwise be answered with `inner`.
    VndPlan {
        inner: Box<MediaType>,
        format: PlanFormat,
        options: PlanOptions,
    },
}

impl MediaType {
    /// Builds a plan media type.
    pub fn plan(inner: MediaType, format: PlanFormat, options: PlanOptions) -> Self {
        MediaType::VndPlan {
            inner: Box::new(inner),
            format,
            options,
        }
    }

    /// Decodes a header value. See [`decode_media_type`].
    pub fn decode(v: impl AsRef<[u8]>) -> Self {
        decode_media_type(v)
    }

    /// Encodes this media type. See [`to_mime`].
    pub fn to_mime(&self) -> Bytes {
        to_mime(self)
    }

    /// Builds the `Content-Type` header for this media type. See [`to_content_type`].
    pub fn to_content_type(&self) -> (&'static str, Bytes) {
        to_content_type(self)
    }

    /// Binary and passthrough types must not be labelled with a text charset.
    fn takes_charset(&self) -> bool {
        !matches!(self, MediaType::OctetStream | MediaType::Other(_))
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_mime()))
    }
}

impl From<&str> for MediaType {
    fn from(v: &str) -> Self {
        decode_media_type(v)
    }
}

impl From<&[u8]> for MediaType {
    fn from(v: &[u8]) -> Self {
        decode_media_type(v)
    }
}

/// Serializes a media type into its canonical header form.
///
/// Plan options are always written in canonical order, and the `options`
/// parameter is left out when the set is empty.
///
/// # Examples
///
/// ```
/// use pgrst_media::{to_mime, MediaType, PlanFormat, PlanOption};
///
/// assert_eq!(to_mime(&MediaType::TextCsv), "text/csv");
///
/// let plan = MediaType::plan(
///     MediaType::TextCsv,
///     PlanFormat::Json,
///     [PlanOption::Wal, PlanOption::Analyze].into_iter().collect(),
/// );
/// assert_eq!(
///     to_mime(&plan),
///     "application/vnd.pgrst.plan+json; for=\"text/csv\"; options=analyze|wal"
/// );
/// ```
pub fn to_mime(mt: &MediaType) -> Bytes {
    let mime: &'static str = match mt {
        MediaType::ApplicationJson => "application/json",
        MediaType::VndArrayJsonStrip => "application/vnd.pgrst.array+json;nulls=stripped",
        MediaType::GeoJson => "application/geo+json",
        MediaType::TextCsv => "text/csv",
        MediaType::TextPlain => "text/plain",
        MediaType::TextXml => "text/xml",
        MediaType::OpenApi => "application/openapi+json",
        MediaType::VndSingularJson { strip_nulls: true } => {
            "application/vnd.pgrst.object+json;nulls=stripped"
        }
        MediaType::VndSingularJson { strip_nulls: false } => "application/vnd.pgrst.object+json",
        MediaType::UrlEncoded => "application/x-www-form-urlencoded",
        MediaType::OctetStream => "application/octet-stream",
        MediaType::Any => "*/*",
        MediaType::Other(raw) => return raw.clone(),
        MediaType::VndPlan {
            inner,
            format,
            options,
        } => return plan_mime(inner, *format, options),
    };
    Bytes::from_static(mime.as_bytes())
}

fn plan_mime(inner: &MediaType, format: PlanFormat, options: &PlanOptions) -> Bytes {
    let inner = to_mime(inner);
    let mut buf = BytesMut::with_capacity(64 + inner.len());
    buf.put_slice(b"application/vnd.pgrst.plan+");
    buf.put_slice(format.as_str().as_bytes());
    buf.put_slice(b"; for=\"");
    buf.put_slice(&inner);
    buf.put_u8(b'"');
    if !options.is_empty() {
        buf.put_slice(b"; options=");
        buf.put_slice(options.to_string().as_bytes());
    }
    buf.freeze()
}

/// Builds the `Content-Type` header for a response body of the given type.
///
/// Every type except `application/octet-stream` and unrecognized passthrough
/// types gets a `; charset=utf-8` suffix.
///
/// # Examples
///
/// ```
/// use pgrst_media::{to_content_type, MediaType};
///
/// let (name, value) = to_content_type(&MediaType::ApplicationJson);
/// assert_eq!(name, "Content-Type");
/// assert_eq!(value, "application/json; charset=utf-8");
///
/// let (_, value) = to_content_type(&MediaType::OctetStream);
/// assert_eq!(value, "application/octet-stream");
/// ```
pub fn to_content_type(mt: &MediaType) -> (&'static str, Bytes) {
    let mime = to_mime(mt);
    if !mt.takes_charset() {
        return (CONTENT_TYPE, mime);
    }

    let mut buf = BytesMut::with_capacity(mime.len() + CHARSET_UTF8.len());
    buf.put_slice(&mime);
    buf.put_slice(CHARSET_UTF8.as_bytes());
    (CONTENT_TYPE, buf.freeze())
}

/// Parses a header value into a [`MediaType`], with default [`DecodeOptions`].
///
/// Never fails. The base type is matched case-sensitively; anything unknown
/// becomes [`MediaType::Other`] holding the bytes before the first `;`, and
/// an empty value becomes [`MediaType::Any`].
///
/// # Examples
///
/// ```
/// use pgrst_media::{decode_media_type, MediaType, PlanFormat, PlanOptions};
///
/// assert_eq!(decode_media_type("application/json"), MediaType::ApplicationJson);
/// assert_eq!(
///     decode_media_type("application/vnd.pgrst.plan+json;for=\"text/csv\""),
///     MediaType::plan(MediaType::TextCsv, PlanFormat::Json, PlanOptions::new())
/// );
/// assert_eq!(
///     decode_media_type("application/x-custom"),
///     MediaType::Other("application/x-custom".into())
/// );
/// ```
pub fn decode_media_type(v: impl AsRef<[u8]>) -> MediaType {
    decode_media_type_with_options(v, &DecodeOptions::default())
}

/// Parses a header value into a [`MediaType`] using custom options.
pub fn decode_media_type_with_options(v: impl AsRef<[u8]>, options: &DecodeOptions) -> MediaType {
    decode_at_depth(v.as_ref(), options, 0)
}

fn decode_at_depth(v: &[u8], options: &DecodeOptions, depth: usize) -> MediaType {
    let (base, params) = split_media_type(v);

    match base {
        b"" => MediaType::Any,
        b"application/json" => MediaType::ApplicationJson,
        b"application/geo+json" => MediaType::GeoJson,
        b"text/csv" => MediaType::TextCsv,
        b"text/plain" => MediaType::TextPlain,
        b"text/xml" => MediaType::TextXml,
        b"application/openapi+json" => MediaType::OpenApi,
        b"application/x-www-form-urlencoded" => MediaType::UrlEncoded,
        b"application/octet-stream" => MediaType::OctetStream,
        b"*/*" => MediaType::Any,
        b"application/vnd.pgrst.plan" | b"application/vnd.pgrst.plan+text" => {
            decode_plan(base, PlanFormat::Text, &params, options, depth)
        }
        b"application/vnd.pgrst.plan+json" => {
            decode_plan(base, PlanFormat::Json, &params, options, depth)
        }
        b"application/vnd.pgrst.object+json" | b"application/vnd.pgrst.object" => {
            MediaType::VndSingularJson {
                strip_nulls: is_exact_param(&params, NULLS_STRIPPED),
            }
        }
        b"application/vnd.pgrst.array+json" | b"application/vnd.pgrst.array" => {
            if is_exact_param(&params, NULLS_STRIPPED) {
                MediaType::VndArrayJsonStrip
            } else {
                MediaType::ApplicationJson
            }
        }
        other => {
            trace!(media_type = %String::from_utf8_lossy(other), "unrecognized media type");
            MediaType::Other(Bytes::copy_from_slice(other))
        }
    }
}

fn decode_plan(
    base: &[u8],
    format: PlanFormat,
    params: &[&[u8]],
    options: &DecodeOptions,
    depth: usize,
) -> MediaType {
    if depth > options.max_depth {
        debug!(
            depth,
            max_depth = options.max_depth,
            "plan media type nested too deeply, treating as unrecognized"
        );
        return MediaType::Other(Bytes::copy_from_slice(base));
    }

    let inner = find_param(params, "for")
        .map(|v| decode_at_depth(unquote(v), options, depth + 1))
        .unwrap_or(MediaType::ApplicationJson);

    // unknown option names are ignored
    let plan_options: PlanOptions = find_param(params, "options")
        .map(|v| {
            v.split(|&b| b == b'|')
                .filter_map(|tok| std::str::from_utf8(tok).ok()?.parse::<PlanOption>().ok())
                .collect()
        })
        .unwrap_or_default();

    MediaType::plan(inner, format, plan_options)
}
