//! The AT-URI splitter.

use std::str::FromStr;

use crate::constants::{MAX_URI_LENGTH, SCHEME_PREFIX};
use crate::error::{ParseError, ParseErrorKind};
use crate::nsid::Nsid;

/// The five components of a successfully split AT-URI.
///
/// `authority` is always non-empty and free of `@`. The other four
/// components use the empty string to mean "absent"; no distinction is
/// made between an absent component and a present-but-empty one.
///
/// # Examples
///
/// ```
/// let parts = aturi::split(
///     "at://did:plc:scewmn2pl3oz36mxme2b6czz/com.example.fooBar/3jui7kd54zh2y"
/// ).unwrap();
///
/// assert_eq!(parts.authority(), "did:plc:scewmn2pl3oz36mxme2b6czz");
/// assert_eq!(parts.collection(), "com.example.fooBar");
/// assert_eq!(parts.rkey(), "3jui7kd54zh2y");
/// assert_eq!(parts.query(), "");
/// assert_eq!(parts.fragment(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtUriParts {
    authority: String,
    collection: String,
    rkey: String,
    query: String,
    fragment: String,
}

impl AtUriParts {
    /// Returns the authority component.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Returns the collection component, or `""` if absent.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Returns the record key component, or `""` if absent.
    #[must_use]
    pub fn rkey(&self) -> &str {
        &self.rkey
    }

    /// Returns the query component (without the leading `?`), or `""` if absent.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the fragment component (without the leading `#`), or `""` if absent.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl FromStr for AtUriParts {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        split(s)
    }
}

impl TryFrom<&str> for AtUriParts {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        split(s)
    }
}

/// Splits an AT-URI into its authority, collection, rkey, query, and
/// fragment components.
///
/// Only the `at://` scheme prefix is matched case-insensitively; nothing
/// else is normalized. A non-empty collection is validated as an NSID.
/// The rkey, query, and fragment are captured verbatim, unvalidated.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - The URI is empty
/// - The URI exceeds 8192 bytes
/// - The URI does not begin with `at://`
/// - The authority is empty or contains `@`
/// - The collection is non-empty and not a valid NSID
///
/// # Examples
///
/// ```
/// let parts = aturi::split("at://example.com/com.example.fooBar/123?a=1#top").unwrap();
/// assert_eq!(parts.authority(), "example.com");
/// assert_eq!(parts.collection(), "com.example.fooBar");
/// assert_eq!(parts.rkey(), "123");
/// assert_eq!(parts.query(), "a=1");
/// assert_eq!(parts.fragment(), "top");
/// ```
pub fn split(uri: &str) -> Result<AtUriParts, ParseError> {
    split_inner(uri).map_err(|kind| ParseError {
        input: uri.to_string(),
        kind,
    })
}

/// Returns an error if the AT-URI is invalid.
///
/// Equivalent to [`split`] with the components discarded.
///
/// # Errors
///
/// Returns the same `ParseError` values as [`split`].
///
/// # Examples
///
/// ```
/// assert!(aturi::validate("at://example.com/com.example.fooBar/123").is_ok());
/// assert!(aturi::validate("at://user@example.com").is_err());
/// ```
pub fn validate(uri: &str) -> Result<(), ParseError> {
    split(uri).map(|_| ())
}

fn split_inner(uri: &str) -> Result<AtUriParts, ParseErrorKind> {
    if uri.is_empty() {
        return Err(ParseErrorKind::Empty);
    }

    if uri.len() > MAX_URI_LENGTH {
        return Err(ParseErrorKind::TooLong {
            max: MAX_URI_LENGTH,
            actual: uri.len(),
        });
    }

    let prefix_len = SCHEME_PREFIX.len();
    let bytes = uri.as_bytes();
    if bytes.len() < prefix_len
        || !bytes[..prefix_len].eq_ignore_ascii_case(SCHEME_PREFIX.as_bytes())
    {
        return Err(ParseErrorKind::InvalidScheme);
    }
    // The matched prefix is ASCII, so this slice lands on a char boundary.
    let mut rest = &uri[prefix_len..];

    let mut parts = AtUriParts::default();

    // authority
    let (authority, tail) = take_token(rest, &['/', '?', '#']);
    rest = tail;

    if authority.is_empty() {
        return Err(ParseErrorKind::EmptyAuthority);
    }
    if authority.contains('@') {
        return Err(ParseErrorKind::InvalidAuthority {
            authority: authority.to_string(),
        });
    }
    parts.authority = authority.to_string();

    if matches!(rest, "" | "/" | "?" | "#") {
        return Ok(parts);
    }

    // collection
    if let Some(tail) = rest.strip_prefix('/') {
        let (collection, tail) = take_token(tail, &['/', '?', '#']);
        if !collection.is_empty() {
            Nsid::parse(collection).map_err(|source| ParseErrorKind::InvalidCollection {
                collection: collection.to_string(),
                source,
            })?;
        }
        parts.collection = collection.to_string();
        rest = tail;
    }

    if matches!(rest, "" | "/" | "?" | "#") {
        return Ok(parts);
    }

    // rkey; '/' is not a delimiter here, a literal slash inside an rkey is legal
    if let Some(tail) = rest.strip_prefix('/') {
        let (rkey, tail) = take_token(tail, &['?', '#']);
        parts.rkey = rkey.to_string();
        rest = tail;
    }

    if matches!(rest, "" | "?" | "#") {
        return Ok(parts);
    }

    // query
    if let Some(tail) = rest.strip_prefix('?') {
        let (query, tail) = take_token(tail, &['#']);
        parts.query = query.to_string();
        rest = tail;
    }

    if matches!(rest, "" | "#") {
        return Ok(parts);
    }

    // fragment, taken verbatim including any further '/', '?', '#'
    if let Some(tail) = rest.strip_prefix('#') {
        parts.fragment = tail.to_string();
    }

    Ok(parts)
}

/// Slices off the head of `s` up to the first delimiter found by priority
/// search, returning `(token, tail)` with the delimiter left at the head of
/// the tail.
///
/// Priority search, not leftmost-of-three: each delimiter is looked up
/// anywhere in `s` before the next one is considered at all, so a `/` deep
/// in the string outranks an earlier `?` or `#`. `at://host?x/y` therefore
/// keeps `?x` inside the authority token. Downstream consumers depend on
/// this exact behavior; do not replace it with a single leftmost scan.
fn take_token<'a>(s: &'a str, delimiters: &[char]) -> (&'a str, &'a str) {
    match delimiters.iter().find_map(|&d| s.find(d)) {
        Some(index) => s.split_at(index),
        None => (s, ""),
    }
}
