//! Grammar helpers for media type parameters.
//!
//! A media type is a base type followed by `;`-separated parameter tokens.
//! Tokens are kept as raw bytes; only the lookups below interpret them.

/// Splits a media type on every `;` into its base type and parameter tokens.
///
/// No trimming or case folding happens here. A trailing `;` yields one
/// empty parameter token.
pub fn split_media_type(v: &[u8]) -> (&[u8], Vec<&[u8]>) {
    let mut parts = v.split(|&b| b == b';');
    // `split` always yields at least one (possibly empty) element
    let base = parts.next().unwrap_or_default();
    (base, parts.collect())
}

/// Strips leading and trailing ASCII whitespace.
pub fn trim_ascii(v: &[u8]) -> &[u8] {
    let start = v.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(v.len());
    let end = v
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &v[start..end]
}

/// Returns the value of the first parameter token starting with `key=`.
///
/// Tokens are compared after trimming surrounding whitespace, so both
/// `for=x` and ` for=x` match.
pub fn find_param<'a>(params: &[&'a [u8]], key: &str) -> Option<&'a [u8]> {
    params.iter().find_map(|param| {
        trim_ascii(*param)
            .strip_prefix(key.as_bytes())
            .and_then(|rest| rest.strip_prefix(b"="))
    })
}

/// Strips one layer of double quotes from each end, where present.
///
/// The two ends are handled independently: `"a` becomes `a`.
pub fn unquote(v: &[u8]) -> &[u8] {
    let v = v.strip_prefix(b"\"").unwrap_or(v);
    v.strip_suffix(b"\"").unwrap_or(v)
}

/// Reports whether the parameter list is exactly the single token `expected`.
///
/// The token is compared raw: surrounding whitespace makes it a different token.
pub fn is_exact_param(params: &[&[u8]], expected: &str) -> bool {
    matches!(params, [only] if *only == expected.as_bytes())
}
