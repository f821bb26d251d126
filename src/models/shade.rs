use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ShadeError;

/// One of the 19 palette keys.
///
/// Keys below 100 are tints (lighter), 100 is the base color, keys above
/// 100 are shades (darker). Ordering follows the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ShadeKey {
    S10,
    S20,
    S30,
    S40,
    S50,
    S60,
    S70,
    S80,
    S90,
    #[default]
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S1000,
}

impl ShadeKey {
    /// All keys in ascending numeric order.
    pub const ALL: [ShadeKey; 19] = [
        ShadeKey::S10,
        ShadeKey::S20,
        ShadeKey::S30,
        ShadeKey::S40,
        ShadeKey::S50,
        ShadeKey::S60,
        ShadeKey::S70,
        ShadeKey::S80,
        ShadeKey::S90,
        ShadeKey::S100,
        ShadeKey::S200,
        ShadeKey::S300,
        ShadeKey::S400,
        ShadeKey::S500,
        ShadeKey::S600,
        ShadeKey::S700,
        ShadeKey::S800,
        ShadeKey::S900,
        ShadeKey::S1000,
    ];

    /// Numeric label of the key.
    pub fn value(self) -> u16 {
        match self {
            ShadeKey::S10 => 10,
            ShadeKey::S20 => 20,
            ShadeKey::S30 => 30,
            ShadeKey::S40 => 40,
            ShadeKey::S50 => 50,
            ShadeKey::S60 => 60,
            ShadeKey::S70 => 70,
            ShadeKey::S80 => 80,
            ShadeKey::S90 => 90,
            ShadeKey::S100 => 100,
            ShadeKey::S200 => 200,
            ShadeKey::S300 => 300,
            ShadeKey::S400 => 400,
            ShadeKey::S500 => 500,
            ShadeKey::S600 => 600,
            ShadeKey::S700 => 700,
            ShadeKey::S800 => 800,
            ShadeKey::S900 => 900,
            ShadeKey::S1000 => 1000,
        }
    }

    /// Position in [`ShadeKey::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_value(value: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.value() as u64 == value)
    }

    /// Lightens toward white.
    #[inline]
    pub fn is_tint(self) -> bool {
        self.value() < 100
    }

    /// Darkens toward black.
    #[inline]
    pub fn is_shade(self) -> bool {
        self.value() > 100
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for ShadeKey {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(Self::from_value)
            .ok_or_else(|| ShadeError::UnknownShade(s.to_string()))
    }
}

impl Serialize for ShadeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct ShadeKeyVisitor;

impl<'de> Visitor<'de> for ShadeKeyVisitor {
    type Value = ShadeKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a shade key (10..90, 100..1000)")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadeKey, E> {
        v.parse().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ShadeKey, E> {
        ShadeKey::from_value(v).ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ShadeKey, E> {
        u64::try_from(v)
            .ok()
            .and_then(ShadeKey::from_value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}

// YAML mappings usually carry the keys as integers, JSON as strings.
impl<'de> Deserialize<'de> for ShadeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ShadeKeyVisitor)
    }
}
