use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Unexpected, Visitor},
};

/// Numeric id of a statement, branch site or function inside one file.
///
/// Reports encode ids as object keys (`"0"`, `"1"`, ...), so the id is
/// deserialised from its string form and compared numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    /// What the decoder expects when a key is not numeric.
    pub const EXPECTED: &'static str = "a non-negative integer id";

    /// Largest id whose 1-based line number still fits in a `u64`.
    pub const MAX: u64 = u64::MAX - 1;

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Parse an object key, rejecting anything but a decimal id up to [`Self::MAX`].
    pub fn parse(text: &str) -> Option<Self> {
        text.parse::<u64>().ok().filter(|id| *id <= Self::MAX).map(Self)
    }

    /// 1-based source line for an id that indexes lines from zero.
    #[inline]
    pub const fn line_number(self) -> u64 {
        self.0.saturating_add(1)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

struct EntityIdVisitor;

impl Visitor<'_> for EntityIdVisitor {
    type Value = EntityId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(EntityId::EXPECTED)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        EntityId::parse(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        if v > EntityId::MAX {
            return Err(E::invalid_value(Unexpected::Unsigned(v), &self));
        }
        Ok(EntityId(v))
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(EntityIdVisitor)
    }
}
