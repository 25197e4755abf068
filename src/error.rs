//! Error types for AT-URI parsing.

use std::fmt;

use crate::constants::SCHEME_PREFIX;

/// Errors that can occur when splitting an AT-URI.
///
/// The rendered messages are stable and relied upon by downstream
/// consumers; change them only with a breaking release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
///
/// The kinds are mutually exclusive and checked first-match-wins in the
/// order they are declared here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// URI is empty
    Empty,
    /// URI exceeds maximum length
    TooLong {
        /// Maximum allowed length in bytes
        max: usize,
        /// Actual length in bytes
        actual: usize,
    },
    /// URI does not begin with "at://" (compared case-insensitively)
    InvalidScheme,
    /// Authority component is empty
    EmptyAuthority,
    /// Authority component contains a disallowed character
    InvalidAuthority {
        /// The offending authority
        authority: String,
    },
    /// Collection component is not a valid NSID
    InvalidCollection {
        /// The offending collection
        collection: String,
        /// The underlying NSID validation failure
        source: NsidError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "aturi: empty URI"),
            ParseErrorKind::TooLong { max, actual } => {
                write!(
                    f,
                    "aturi: URI is {actual} bytes long but an AT-URI may not be more than {max} bytes long"
                )
            }
            ParseErrorKind::InvalidScheme => {
                write!(
                    f,
                    "aturi: URI \"{}\" is not an at-uri because it does not begin with \"{SCHEME_PREFIX}\"",
                    self.input
                )
            }
            ParseErrorKind::EmptyAuthority => {
                write!(f, "aturi: URI \"{}\" has an empty 'authority'", self.input)
            }
            ParseErrorKind::InvalidAuthority { authority } => {
                write!(
                    f,
                    "aturi: URI \"{}\" may not have an \"@\" in its authority \"{authority}\"",
                    self.input
                )
            }
            ParseErrorKind::InvalidCollection { collection, source } => {
                write!(
                    f,
                    "aturi: URI \"{}\" has a collection \"{collection}\" that is not a valid NSID: {source}",
                    self.input
                )
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidCollection { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors for NSID validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NsidError {
    /// NSID is empty
    Empty,
    /// NSID exceeds maximum length
    TooLong {
        /// Maximum allowed length in bytes
        max: usize,
        /// Actual length in bytes
        actual: usize,
    },
    /// NSID has fewer dot-separated segments than required
    NotEnoughSegments {
        /// Minimum required segment count
        min: usize,
        /// Actual segment count
        actual: usize,
    },
    /// A dot-separated segment is empty
    EmptySegment {
        /// Index of the empty segment
        index: usize,
    },
    /// Invalid character in a segment
    InvalidChar {
        /// The invalid character
        char: char,
        /// Byte position in the input
        position: usize,
    },
}

impl fmt::Display for NsidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "NSID cannot be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "NSID length {actual} exceeds maximum {max}")
            }
            Self::NotEnoughSegments { min, actual } => {
                write!(
                    f,
                    "NSID has {actual} dot-separated segments but needs at least {min}"
                )
            }
            Self::EmptySegment { index } => {
                write!(f, "NSID segment at index {index} is empty")
            }
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; only ASCII letters, digits, and hyphens allowed"
                )
            }
        }
    }
}

impl std::error::Error for NsidError {}
