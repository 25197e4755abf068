//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common items:
//!
//! ```rust
//! use aturi::prelude::*;
//!
//! let parts = split("at://example.com/com.example.fooBar/123").unwrap();
//! assert_eq!(parts.rkey(), "123");
//! ```

pub use crate::{
    // Core operations and types
    AtUriParts, Nsid, split, validate,
    // Errors
    NsidError, ParseError, ParseErrorKind,
    // Constants
    MAX_NSID_LENGTH, MAX_URI_LENGTH, MIN_NSID_SEGMENTS, SCHEME, SCHEME_PREFIX,
};
