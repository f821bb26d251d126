//! Pure conversions between hex strings, [`Rgba`] and its HSL/HSV projections.
//!
//! All functions are total: malformed input falls back to a default or is
//! clamped, never rejected. Use `str::parse::<Rgba>()` for strict parsing.

use std::sync::OnceLock;

use regex::Regex;

use super::rgba::{Hsl, Hsv, Rgba};

/// Round half away from zero to `decimals` places.
#[inline]
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Integer-prefix hex parse: consumes leading hex digits, stops at the first
/// non-digit. An empty prefix yields 0.
fn parse_hex_prefix(digits: &[char]) -> f64 {
    digits
        .iter()
        .map_while(|c| c.to_digit(16))
        .fold(0.0, |acc, d| acc * 16.0 + d as f64)
}

#[inline]
fn channel(digits: &[char]) -> u8 {
    parse_hex_prefix(digits) as u8
}

/// Convert a two-digit hex opacity (`"80"`) to an alpha rounded to 2 decimals.
///
/// ```
/// assert_eq!(shadegen::hex_opacity_to_alpha("80"), 0.5);
/// assert_eq!(shadegen::hex_opacity_to_alpha("FF"), 1.0);
/// ```
pub fn hex_opacity_to_alpha(hex_alpha: &str) -> f64 {
    let digits: Vec<char> = hex_alpha.chars().collect();
    round_to(parse_hex_prefix(&digits) / 255.0, 2)
}

/// Permissively parse a hex color.
///
/// Accepts an optional leading `#` followed by 3 (shorthand), 6 or 8
/// (with alpha) digits. Any other length returns [`Rgba::BLACK`] instead of
/// an error.
pub fn hex_to_rgba(hex_color: &str) -> Rgba {
    let hex = hex_color.strip_prefix('#').unwrap_or(hex_color);
    let d: Vec<char> = hex.chars().collect();

    let mut rgba = Rgba::BLACK;
    match d.len() {
        3 => {
            rgba.r = channel(&[d[0], d[0]]);
            rgba.g = channel(&[d[1], d[1]]);
            rgba.b = channel(&[d[2], d[2]]);
            rgba.a = Some(1.0);
        }
        6 => {
            rgba.r = channel(&d[0..2]);
            rgba.g = channel(&d[2..4]);
            rgba.b = channel(&d[4..6]);
            rgba.a = Some(1.0);
        }
        8 => {
            rgba.r = channel(&d[0..2]);
            rgba.g = channel(&d[2..4]);
            rgba.b = channel(&d[4..6]);
            rgba.a = Some(round_to(parse_hex_prefix(&d[6..8]) / 255.0, 2));
        }
        _ => {}
    }

    rgba
}

/// Clamp a decimal alpha into 0.0..=1.0.
///
/// ```
/// use shadegen::parse_dec_alpha;
/// assert_eq!(parse_dec_alpha(1.5), 1.0);
/// assert_eq!(parse_dec_alpha(-0.2), 0.0);
/// assert_eq!(parse_dec_alpha(0.42), 0.42);
/// ```
pub fn parse_dec_alpha(dec_alpha: f64) -> f64 {
    if dec_alpha > 1.0 {
        1.0
    } else if dec_alpha < 0.0 {
        0.0
    } else {
        dec_alpha
    }
}

/// Render a value as a two-digit lowercase hex byte.
///
/// Alpha values are clamped to 0..=1 and scaled by 255 first. The result is
/// always rounded and clamped to 0..=255.
pub fn dec_to_hex(value: f64, is_alpha: bool) -> String {
    let v = if is_alpha {
        parse_dec_alpha(value) * 255.0
    } else {
        value
    };
    format!("{:02x}", v.clamp(0.0, 255.0).round() as u8)
}

/// Format a color as an upper-case hex string.
///
/// With `with_alpha`, an alpha byte is appended when the color has one.
pub fn rgba_to_hex(rgba: &Rgba, with_hash: bool, with_alpha: bool) -> String {
    let mut hex = String::with_capacity(9);
    if with_hash {
        hex.push('#');
    }
    for c in rgba.channels() {
        hex.push_str(&dec_to_hex(c as f64, false));
    }
    if let (true, Some(a)) = (with_alpha, rgba.a) {
        hex.push_str(&dec_to_hex(a, true));
    }
    hex.to_uppercase()
}

/// Hue in degrees from the six-region formula, wrapped into 0..=360.
fn hue(r: f64, g: f64, b: f64, min: f64, max: f64) -> f64 {
    let delta = max - min;
    let h = if max == min {
        0.0
    } else if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let h = (h * 60.0).min(360.0);
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

pub fn rgb_to_hsl(rgba: &Rgba) -> Hsl {
    let r = rgba.r as f64 / 255.0;
    let g = rgba.g as f64 / 255.0;
    let b = rgba.b as f64 / 255.0;
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    let h = hue(r, g, b, min, max);
    let l = (min + max) / 2.0;

    let s = if max == min {
        0.0
    } else if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    Hsl {
        h: h.round() as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// HSV projection.
///
/// Unlike [`rgb_to_hsl`], the hue works on raw 0..=255 channel differences.
pub fn rgb_to_hsv(rgba: &Rgba) -> Hsv {
    let r = rgba.r as f64;
    let g = rgba.g as f64;
    let b = rgba.b as f64;
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    let s = if max == 0.0 {
        0.0
    } else {
        ((delta / max) * 1000.0) / 10.0
    };
    let h = hue(r, g, b, min, max);
    let v = ((max / 255.0) * 1000.0) / 10.0;

    Hsv {
        h: h.round() as u16,
        s: s.round() as u8,
        v: v.round() as u8,
    }
}

/// Format as `hsl(Hdeg, S%, L%)`.
pub fn format_hsl(rgba: &Rgba) -> String {
    rgb_to_hsl(rgba).to_string()
}

/// Format as `rgb(r, g, b)` when alpha is absent, `rgba(r, g, b, a)` otherwise.
pub fn format_rgba(rgba: &Rgba) -> String {
    let Rgba { r, g, b, a } = *rgba;
    match a {
        None => format!("rgb({}, {}, {})", r, g, b),
        Some(a) => format!("rgba({}, {}, {}, {})", r, g, b, a),
    }
}

static STRICT_HEX: OnceLock<Regex> = OnceLock::new();
static LOOSE_HEX: OnceLock<Regex> = OnceLock::new();

fn hex_pattern(strict: bool) -> &'static Regex {
    if strict {
        STRICT_HEX.get_or_init(|| {
            Regex::new(r"(?i)^#([a-f0-9]{3,4}|[a-f0-9]{4}(?:[a-f0-9]{2}){1,2})\b$")
                .expect("strict hex pattern is valid")
        })
    } else {
        LOOSE_HEX.get_or_init(|| {
            Regex::new(r"(?i)#([a-f0-9]{3}|[a-f0-9]{4}(?:[a-f0-9]{2}){0,2})\b")
                .expect("loose hex pattern is valid")
        })
    }
}

/// Check whether `color` looks like a hex color.
///
/// The pattern admits 3, 4, 6 and 8 digits, but the digit count after
/// stripping a leading `#` must also be exactly 6, so only `RRGGBB` forms
/// ever pass. Strict mode anchors the pattern and requires the `#`.
///
/// ```
/// use shadegen::is_hex_color;
/// assert!(is_hex_color("#336699", true));
/// assert!(!is_hex_color("#FFF", true));
/// assert!(!is_hex_color("336699", true));
/// ```
pub fn is_hex_color(color: &str, strict: bool) -> bool {
    let hex = color.strip_prefix('#').unwrap_or(color);
    let long_hand = hex.chars().count() == 6;

    hex_pattern(strict).is_match(color) && long_hand
}
