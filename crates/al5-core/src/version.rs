//! Packed version words
//!
//! Allegro reports every library and addon version as one `u32`:
//!
//! ```text
//!  31      24 23      16 15       8 7        0
//! ┌──────────┬──────────┬──────────┬──────────┐
//! │  major   │  minor   │ revision │ release  │
//! └──────────┴──────────┴──────────┴──────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Split a packed version word into `(major, minor, revision, release)`.
#[inline]
pub const fn decode_version(packed: u32) -> (u8, u8, u8, u8) {
    (
        ((packed >> 24) & 0xFF) as u8,
        ((packed >> 16) & 0xFF) as u8,
        ((packed >> 8) & 0xFF) as u8,
        (packed & 0xFF) as u8,
    )
}

/// Decoded library version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub revision: u8,
    pub release: u8,
}

impl Version {
    pub const fn new(major: u8, minor: u8, revision: u8, release: u8) -> Self {
        Self {
            major,
            minor,
            revision,
            release,
        }
    }

    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        let (major, minor, revision, release) = decode_version(packed);
        Self::new(major, minor, revision, release)
    }

    /// Re-pack into the native layout.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.major as u32) << 24)
            | ((self.minor as u32) << 16)
            | ((self.revision as u32) << 8)
            | self.release as u32
    }

    #[inline]
    pub const fn as_tuple(self) -> (u8, u8, u8, u8) {
        (self.major, self.minor, self.revision, self.release)
    }
}

impl From<u32> for Version {
    fn from(packed: u32) -> Self {
        Self::from_packed(packed)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.revision, self.release
        )
    }
}
