//! NSID type for collection identifiers.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::constants::{MAX_NSID_LENGTH, MIN_NSID_SEGMENTS};
use crate::error::NsidError;

/// A validated NSID (namespaced identifier).
///
/// NSIDs are reverse-domain-style identifiers naming a record collection,
/// with at least three dot-separated segments, e.g. `com.example.fooBar`.
///
/// # Examples
///
/// ```
/// use aturi::Nsid;
///
/// let nsid = Nsid::parse("com.example.fooBar").unwrap();
/// assert_eq!(nsid.as_str(), "com.example.fooBar");
/// assert_eq!(nsid.segments().count(), 3);
///
/// assert!(Nsid::parse("example").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nsid(String);

impl Nsid {
    /// Parses an NSID from a string.
    ///
    /// # Errors
    ///
    /// Returns `NsidError` if:
    /// - The input is empty
    /// - The input exceeds 317 bytes
    /// - Any dot-separated segment is empty
    /// - There are fewer than 3 dot-separated segments
    /// - A segment contains a character outside ASCII letters, digits, and hyphens
    pub fn parse(input: &str) -> Result<Self, NsidError> {
        if input.is_empty() {
            return Err(NsidError::Empty);
        }

        if input.len() > MAX_NSID_LENGTH {
            return Err(NsidError::TooLong {
                max: MAX_NSID_LENGTH,
                actual: input.len(),
            });
        }

        let mut segments = 0usize;
        for (index, segment) in input.split('.').enumerate() {
            if segment.is_empty() {
                return Err(NsidError::EmptySegment { index });
            }
            segments = index + 1;
        }

        if segments < MIN_NSID_SEGMENTS {
            return Err(NsidError::NotEnoughSegments {
                min: MIN_NSID_SEGMENTS,
                actual: segments,
            });
        }

        for (position, c) in input.char_indices() {
            if c != '.' && !Self::is_valid_char(c) {
                return Err(NsidError::InvalidChar { char: c, position });
            }
        }

        Ok(Self(input.to_string()))
    }

    /// Returns the NSID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an iterator over the dot-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Returns true if the character is valid inside an NSID segment.
    #[must_use]
    pub const fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-'
    }
}

impl fmt::Display for Nsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Nsid {
    type Err = NsidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Nsid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Nsid {
    type Error = NsidError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for Nsid {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialOrd for Nsid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Nsid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Nsid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Nsid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
