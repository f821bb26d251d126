//! RGBA color record and its HSL/HSV projections.
//!
//! Channels are stored as 8-bit integers. Alpha is optional: `None` means
//! "fully opaque, do not render an alpha channel", which formats differently
//! from an explicit `Some(1.0)`.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::convert::{format_rgba, round_to};
use crate::error::ParseColorError;

/// An sRGB color with 0..=255 channels and an optional 0.0..=1.0 alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha (0.0..=1.0). `None` renders as `rgb(...)`.
    pub a: Option<f64>,
}

impl Rgba {
    /// Opaque black with an explicit alpha of 1, the fallback for malformed hex.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: Some(1.0),
    };

    /// Create a color with an explicit alpha.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }

    /// Create a color with no alpha channel.
    ///
    /// # Example
    /// ```
    /// use shadegen::Rgba;
    /// assert_eq!(Rgba::rgb(1, 2, 3).to_string(), "rgb(1, 2, 3)");
    /// ```
    #[inline]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Return a copy with the alpha replaced.
    #[inline]
    pub fn with_alpha(self, a: Option<f64>) -> Self {
        Self { a, ..self }
    }

    /// Whether the color carries an explicit alpha of exactly 1.
    #[inline]
    pub fn is_explicitly_opaque(&self) -> bool {
        self.a == Some(1.0)
    }

    #[inline]
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_rgba(self))
    }
}

fn hex_digit(c: char) -> Result<u8, ParseIntError> {
    let mut buf = [0u8; 4];
    u8::from_str_radix(c.encode_utf8(&mut buf), 16)
}

fn hex_pair(hi: char, lo: char) -> Result<u8, ParseIntError> {
    Ok(hex_digit(hi)? * 16 + hex_digit(lo)?)
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Strictly parse a hex color.
    ///
    /// Accepts `RGB`, `RRGGBB` and `RRGGBBAA`, each with an optional `#`.
    /// Unlike [`hex_to_rgba`](crate::hex_to_rgba), any other length or a
    /// non-hex digit is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use shadegen::Rgba;
    ///
    /// let teal: Rgba = "#336699".parse().unwrap();
    /// assert_eq!(teal, Rgba::new(51, 102, 153, 1.0));
    ///
    /// assert!("#12345".parse::<Rgba>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        let d: Vec<char> = s.chars().collect();

        match d.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = hex_digit(d[0])? * 17;
                let g = hex_digit(d[1])? * 17;
                let b = hex_digit(d[2])? * 17;
                Ok(Self::new(r, g, b, 1.0))
            }
            6 => Ok(Self::new(
                hex_pair(d[0], d[1])?,
                hex_pair(d[2], d[3])?,
                hex_pair(d[4], d[5])?,
                1.0,
            )),
            8 => {
                let alpha = hex_pair(d[6], d[7])?;
                Ok(Self::new(
                    hex_pair(d[0], d[1])?,
                    hex_pair(d[2], d[3])?,
                    hex_pair(d[4], d[5])?,
                    round_to(alpha as f64 / 255.0, 2),
                ))
            }
            n => Err(ParseColorError::InvalidLength(n)),
        }
    }
}

/// Hue/saturation/lightness projection of an [`Rgba`].
///
/// `h` is in degrees (0..=360), `s` and `l` are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}deg, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Hue/saturation/value projection of an [`Rgba`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}deg, {}%, {}%)", self.h, self.s, self.v)
    }
}
