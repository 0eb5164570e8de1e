//! Snowflake identifiers.
//!
//! Every remote entity is named by a 64-bit snowflake. The upper 42 bits
//! hold milliseconds since [`SERVICE_EPOCH_MS`], so numeric order is also
//! creation order.

use crate::Error;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// First millisecond of 2015, in Unix milliseconds.
pub const SERVICE_EPOCH_MS: u64 = 1_420_070_400_000;

const TIMESTAMP_SHIFT: u32 = 22;
const MAX_TIMESTAMP_OFFSET: u64 = u64::MAX >> TIMESTAMP_SHIFT;
const WORKER_SHIFT: u32 = 17;
const PROCESS_SHIFT: u32 = 12;
const FIVE_BITS: u64 = 0x1F;
const TWELVE_BITS: u64 = 0xFFF;

/// Unique, time-ordered identifier for a mirrored entity.
///
/// Serialized as a decimal string, which is how the remote service ships
/// identifiers in JSON; deserialization also accepts plain integers.
/// Decoding relies on `deserialize_any`, so it needs a self-describing
/// format such as JSON; non-self-describing formats like bincode cannot
/// decode a `Snowflake`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake(u64);

impl Snowflake {
    /// The unset identifier.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw 64-bit value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Builds the lowest snowflake that could have been minted at the given
    /// Unix millisecond. Instants before the service epoch clamp to zero;
    /// instants past the 42-bit timestamp range clamp to its last millisecond.
    #[must_use]
    pub const fn from_timestamp_ms(unix_ms: u64) -> Self {
        let offset = unix_ms.saturating_sub(SERVICE_EPOCH_MS);
        let offset = if offset > MAX_TIMESTAMP_OFFSET {
            MAX_TIMESTAMP_OFFSET
        } else {
            offset
        };
        Self(offset << TIMESTAMP_SHIFT)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns true for the unset identifier.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Creation time in Unix milliseconds.
    #[must_use]
    pub const fn timestamp_ms(&self) -> u64 {
        (self.0 >> TIMESTAMP_SHIFT) + SERVICE_EPOCH_MS
    }

    /// Internal worker that minted the id.
    #[must_use]
    pub const fn worker_id(&self) -> u8 {
        ((self.0 >> WORKER_SHIFT) & FIVE_BITS) as u8
    }

    /// Internal process that minted the id.
    #[must_use]
    pub const fn process_id(&self) -> u8 {
        ((self.0 >> PROCESS_SHIFT) & FIVE_BITS) as u8
    }

    /// Per-process increment.
    #[must_use]
    pub const fn increment(&self) -> u16 {
        (self.0 & TWELVE_BITS) as u16
    }

    /// Parses a snowflake from its decimal form.
    pub fn parse(s: &str) -> crate::Result<Self> {
        s.parse()
    }
}

impl From<u64> for Snowflake {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| Error::InvalidSnowflake(s.to_string()))
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

struct SnowflakeVisitor;

impl Visitor<'_> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a snowflake as a decimal string or unsigned integer")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Snowflake(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(Snowflake)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}
