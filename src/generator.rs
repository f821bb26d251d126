//! Stateful tint/shade palette generator.
//!
//! [`ShadeGenerator`] holds a base color, a 19-entry table of multipliers
//! with cached colors, and a cursor selecting the "current" shade. Setting a
//! hue regenerates the whole table; everything else reads it or touches a
//! single entry.

use std::collections::BTreeMap;

use crate::color::{
    format_hsl, hex_to_rgba, is_hex_color, parse_dec_alpha, rgb_to_hsv, round_to, Hsv, Rgba,
};
use crate::error::ShadeError;
use crate::models::{ColorFormat, ShadeConfig, ShadeKey};

/// A palette slot: its multiplier and the color derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeEntry {
    pub multiplier: f64,
    pub value: Rgba,
}

/// Derive one palette color from a base color.
///
/// Shades (keys above 100) scale each channel toward 0 by `multiplier`;
/// tints (keys below 100) move each channel toward 255 by `multiplier`.
/// Key 100 returns `base` unchanged. Channels are rounded half away from
/// zero and clamped; alpha is copied from `base`.
///
/// ```
/// use shadegen::{generate_shade, Rgba, ShadeKey};
///
/// let base = Rgba::new(51, 102, 153, 1.0);
/// assert_eq!(generate_shade(&base, ShadeKey::S500, 0.6), Rgba::new(31, 61, 92, 1.0));
/// assert_eq!(generate_shade(&base, ShadeKey::S50, 0.5), Rgba::new(153, 179, 204, 1.0));
/// ```
pub fn generate_shade(base: &Rgba, key: ShadeKey, multiplier: f64) -> Rgba {
    if key == ShadeKey::S100 {
        return *base;
    }

    let derive = |channel: u8| -> u8 {
        let c = channel as f64;
        let v = if key.is_shade() {
            c * multiplier
        } else {
            c + (255.0 - c) * multiplier
        };
        v.round().clamp(0.0, 255.0) as u8
    };

    Rgba {
        r: derive(base.r),
        g: derive(base.g),
        b: derive(base.b),
        a: base.a,
    }
}

/// Palette generator for a single base color.
///
/// Mutating methods take `&mut self` and return `&mut Self` so calls can
/// be chained. Methods without a key argument act on the current shade
/// (see [`shade()`](Self::shade)); each has a `*_of`/`*_at` twin taking the
/// key explicitly. To format an arbitrary color instead, use
/// [`ColorFormat::render`].
///
/// Not synchronized: share between threads behind a `Mutex`.
///
/// # Example
///
/// ```
/// use shadegen::{ShadeGenerator, ShadeKey};
///
/// let mut generator = ShadeGenerator::new();
/// let hex = generator.hue("#336699")?.shade(ShadeKey::S500).hex();
/// assert_eq!(hex, "#1F3D5C");
/// # Ok::<(), shadegen::ShadeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ShadeGenerator {
    base_color: Rgba,
    entries: [ShadeEntry; 19],
    current: ShadeKey,
}

impl Default for ShadeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShadeGenerator {
    /// Default multipliers, black base color, cursor on 100.
    pub fn new() -> Self {
        Self::with_config(&ShadeConfig::default())
    }

    /// Start from a custom multiplier table.
    pub fn with_config(config: &ShadeConfig) -> Self {
        let mut entries = [ShadeEntry {
            multiplier: 0.0,
            value: Rgba::BLACK,
        }; 19];
        for (key, multiplier) in config.iter() {
            entries[key.index()].multiplier = multiplier;
        }

        Self {
            base_color: Rgba::BLACK,
            entries,
            current: ShadeKey::S100,
        }
    }

    /// Replace every multiplier.
    ///
    /// Cached colors are left as they are until the next [`hue()`](Self::hue).
    pub fn config(&mut self, config: &ShadeConfig) -> &mut Self {
        for (key, multiplier) in config.iter() {
            self.entries[key.index()].multiplier = multiplier;
        }
        tracing::debug!("Applied shade multipliers");
        self
    }

    /// The active multiplier table.
    pub fn multipliers(&self) -> ShadeConfig {
        ShadeKey::ALL
            .into_iter()
            .fold(ShadeConfig::default(), |config, key| {
                config.with(key, self.entries[key.index()].multiplier)
            })
    }

    /// Set the base color and regenerate the palette.
    ///
    /// Only `#RRGGBB` is accepted (see [`is_hex_color`]); anything else
    /// leaves the generator untouched and returns
    /// [`ShadeError::InvalidHue`].
    pub fn hue(&mut self, color: &str) -> Result<&mut Self, ShadeError> {
        if !is_hex_color(color, true) {
            tracing::warn!(hue = %color, "Rejected invalid hue");
            return Err(ShadeError::InvalidHue(color.to_string()));
        }

        self.base_color = hex_to_rgba(color);
        tracing::debug!(hue = %color, "Regenerating palette");
        self.generate_shades();

        Ok(self)
    }

    /// Move the cursor. Nothing is recomputed.
    pub fn shade(&mut self, key: ShadeKey) -> &mut Self {
        self.current = key;
        self
    }

    pub fn current_shade(&self) -> ShadeKey {
        self.current
    }

    pub fn base_color(&self) -> Rgba {
        self.base_color
    }

    pub fn entry(&self, key: ShadeKey) -> ShadeEntry {
        self.entries[key.index()]
    }

    /// Derive `key` from the base color and its configured multiplier.
    ///
    /// Does not touch the cached value.
    pub fn generate_shade(&self, key: ShadeKey) -> Rgba {
        generate_shade(&self.base_color, key, self.entries[key.index()].multiplier)
    }

    /// Recompute every cached value in key order.
    pub fn generate_shades(&mut self) {
        for key in ShadeKey::ALL {
            let value = self.generate_shade(key);
            tracing::trace!(shade = %key, color = %value, "Generated shade");
            self.entries[key.index()].value = value;
        }
    }

    /// Override the alpha of the current shade.
    pub fn opacity(&mut self, amount: f64) -> &mut Self {
        self.opacity_at(self.current, amount)
    }

    /// Override the alpha of one shade.
    ///
    /// `amount` is clamped to 0..=1 and rounded to 2 decimals. Other
    /// entries keep their alpha.
    pub fn opacity_at(&mut self, key: ShadeKey, amount: f64) -> &mut Self {
        let alpha = round_to(parse_dec_alpha(amount), 2);
        self.entries[key.index()].value.a = Some(alpha);
        tracing::debug!(shade = %key, alpha, "Applied opacity");
        self
    }

    pub fn current_shade_value(&self) -> Rgba {
        self.shade_value(self.current)
    }

    pub fn shade_value(&self, key: ShadeKey) -> Rgba {
        self.entries[key.index()].value
    }

    /// Render every cached value, ordered by key.
    pub fn shades_map(&self, format: ColorFormat) -> BTreeMap<ShadeKey, String> {
        ShadeKey::ALL
            .into_iter()
            .map(|key| (key, format.render(&self.shade_value(key))))
            .collect()
    }

    /// [`shades_map()`](Self::shades_map) as a JSON object keyed by shade label.
    pub fn shades_json(&self, format: ColorFormat) -> Result<String, ShadeError> {
        Ok(serde_json::to_string(&self.shades_map(format))?)
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv_of(self.current)
    }

    pub fn hsv_of(&self, key: ShadeKey) -> Hsv {
        rgb_to_hsv(&self.shade_value(key))
    }

    /// Current shade as `rgb(...)`/`rgba(...)`; an alpha of exactly 1 is omitted.
    pub fn rgba(&self) -> String {
        self.rgba_of(self.current)
    }

    pub fn rgba_of(&self, key: ShadeKey) -> String {
        ColorFormat::Rgba.render(&self.shade_value(key))
    }

    /// Current shade as `hsl(Hdeg, S%, L%)`.
    pub fn hsl(&self) -> String {
        self.hsl_of(self.current)
    }

    pub fn hsl_of(&self, key: ShadeKey) -> String {
        format_hsl(&self.shade_value(key))
    }

    /// Current shade as `#RRGGBB`, or `#RRGGBBAA` when alpha is not 1.
    pub fn hex(&self) -> String {
        self.hex_of(self.current)
    }

    pub fn hex_of(&self, key: ShadeKey) -> String {
        ColorFormat::Hex.render(&self.shade_value(key))
    }
}
