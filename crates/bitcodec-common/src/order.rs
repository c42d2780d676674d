//! Byte-order descriptor.
//!
//! [`ByteOrder`] is the value callers hand to the codec registry to pick a
//! codec. It is a closed two-value enum: unrecognized descriptors are an
//! error when parsed from text, never a silent fallback.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Which byte of a multi-byte value is stored at the lowest index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Most-significant byte first.
    Big,
    /// Least-significant byte first.
    #[default]
    Little,
}

impl ByteOrder {
    /// Network byte order.
    pub const NETWORK: Self = Self::Big;

    /// Byte order of the host this binary was compiled for.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// The opposite byte order.
    #[inline]
    pub const fn swapped(self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }

    /// Canonical name, as rendered by `Display`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Big => "big-endian",
            Self::Little => "little-endian",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" | "be" | "big-endian" | "big_endian" | "network" => Ok(Self::Big),
            "little" | "le" | "little-endian" | "little_endian" => Ok(Self::Little),
            "native" => Ok(Self::native()),
            _ => Err(Error::UnknownByteOrder(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ByteOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ByteOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
