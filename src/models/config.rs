use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::shade::ShadeKey;
use crate::error::ShadeError;

/// Published palette defaults, in [`ShadeKey::ALL`] order.
///
/// The shade range mirrors the tint range numerically but feeds the
/// darkening formula instead of the lightening one.
pub const DEFAULT_MULTIPLIERS: [f64; 19] = [
    0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1, // tints 10..90
    0.0, // base 100
    0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1, // shades 200..1000
];

/// Per-shade multiplier table.
///
/// Always complete: every one of the 19 keys has a multiplier. Deserializes
/// from a mapping of shade key to number, e.g. in YAML:
///
/// ```yaml
/// 10: 0.95
/// 20: 0.85
/// # ... every key through 1000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<ShadeKey, f64>",
    into = "BTreeMap<ShadeKey, f64>"
)]
pub struct ShadeConfig {
    multipliers: [f64; 19],
}

impl Default for ShadeConfig {
    fn default() -> Self {
        Self {
            multipliers: DEFAULT_MULTIPLIERS,
        }
    }
}

impl ShadeConfig {
    /// Multiplier for one key.
    #[inline]
    pub fn multiplier(&self, key: ShadeKey) -> f64 {
        self.multipliers[key.index()]
    }

    /// Replace a single multiplier.
    pub fn with(mut self, key: ShadeKey, multiplier: f64) -> Self {
        self.multipliers[key.index()] = multiplier;
        self
    }

    /// Iterate `(key, multiplier)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, f64)> + '_ {
        ShadeKey::ALL.into_iter().zip(self.multipliers.iter().copied())
    }

    /// Build from a complete key → multiplier mapping.
    ///
    /// Partial maps are rejected; the first missing key is reported.
    pub fn from_map(map: &BTreeMap<ShadeKey, f64>) -> Result<Self, ShadeError> {
        let mut multipliers = [0.0; 19];
        for key in ShadeKey::ALL {
            multipliers[key.index()] = *map
                .get(&key)
                .ok_or(ShadeError::MissingMultiplier(key))?;
        }
        Ok(Self { multipliers })
    }

    /// Parse a YAML mapping of shade keys to multipliers.
    pub fn from_yaml_str(content: &str) -> Result<Self, ShadeError> {
        let map: BTreeMap<ShadeKey, f64> = serde_yaml::from_str(content)?;
        let config = Self::from_map(&map)?;
        tracing::debug!(entries = map.len(), "Loaded shade configuration from YAML");
        Ok(config)
    }

    /// Parse a JSON object of shade keys to multipliers.
    pub fn from_json_str(content: &str) -> Result<Self, ShadeError> {
        let map: BTreeMap<ShadeKey, f64> = serde_json::from_str(content)?;
        let config = Self::from_map(&map)?;
        tracing::debug!(entries = map.len(), "Loaded shade configuration from JSON");
        Ok(config)
    }

    pub fn to_map(&self) -> BTreeMap<ShadeKey, f64> {
        self.iter().collect()
    }
}

impl TryFrom<BTreeMap<ShadeKey, f64>> for ShadeConfig {
    type Error = ShadeError;

    fn try_from(map: BTreeMap<ShadeKey, f64>) -> Result<Self, Self::Error> {
        Self::from_map(&map)
    }
}

impl From<ShadeConfig> for BTreeMap<ShadeKey, f64> {
    fn from(config: ShadeConfig) -> Self {
        config.to_map()
    }
}
