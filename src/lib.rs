//! Parser and validator for the `at://` URI scheme.
//!
//! This crate splits AT-URIs, the addressing scheme used to reference
//! records in the AT Protocol record graph, into their five components.
//!
//! # Overview
//!
//! AT-URIs have the structure:
//!
//! ```text
//! at://<authority>[/<collection>[/<rkey>]][?query][#fragment]
//! ```
//!
//! Only the authority is required. The collection, when present and
//! non-empty, must be a valid NSID (a reverse-domain identifier with at
//! least three dot-separated segments). The rkey, query, and fragment are
//! captured verbatim without validation. There is no inverse operation:
//! the crate takes URIs apart and never reassembles them.
//!
//! # Quick Start
//!
//! ```rust
//! let parts = aturi::split(
//!     "at://did:plc:scewmn2pl3oz36mxme2b6czz/com.example.fooBar/3jui7kd54zh2y"
//! ).unwrap();
//!
//! assert_eq!(parts.authority(), "did:plc:scewmn2pl3oz36mxme2b6czz");
//! assert_eq!(parts.collection(), "com.example.fooBar");
//! assert_eq!(parts.rkey(), "3jui7kd54zh2y");
//!
//! // Yes/no checks without naming the components:
//! assert!(aturi::validate("at://example.com").is_ok());
//! assert!(aturi::validate("at://user@example.com").is_err());
//! ```
//!
//! # Delimiter Scanning
//!
//! The authority and collection tokens end at a delimiter found by a
//! *priority* search: `/` anywhere in the remainder is preferred over `?`,
//! which is preferred over `#`, regardless of which occurs first in the
//! text. `at://host?x/y` therefore keeps `?x` inside the authority token.
//! This matches the wire behavior existing consumers depend on; see
//! [`split`] for details.
//!
//! # Length Constraints
//!
//! | Component | Max Length |
//! |-----------|------------|
//! | Total URI | 8192 bytes |
//! | NSID (collection) | 317 bytes |
//! | NSID segments | 3 minimum |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod error;
mod nsid;
pub mod prelude;
mod uri;

pub use constants::{MAX_NSID_LENGTH, MAX_URI_LENGTH, MIN_NSID_SEGMENTS, SCHEME, SCHEME_PREFIX};
pub use error::{NsidError, ParseError, ParseErrorKind};
pub use nsid::Nsid;
pub use uri::{AtUriParts, split, validate};
