//! Constants for AT-URI validation.

/// Maximum total URI length in bytes (8 KiB).
pub const MAX_URI_LENGTH: usize = 8192;

/// The URI scheme.
pub const SCHEME: &str = "at";

/// The scheme prefix every AT-URI must start with (case-insensitively).
pub const SCHEME_PREFIX: &str = "at://";

/// Minimum number of dot-separated segments in an NSID.
pub const MIN_NSID_SEGMENTS: usize = 3;

/// Maximum NSID length in bytes.
pub const MAX_NSID_LENGTH: usize = 317;
