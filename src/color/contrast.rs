//! Relative luminance and contrast ratio (WCAG formulas over sRGB).

use super::convert::round_to;
use super::rgba::Rgba;

/// sRGB channel (0..=255) to linear light.
#[inline]
fn linearize(channel: u8) -> f64 {
    let value = channel as f64 / 255.0;
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

fn luminance(rgba: &Rgba) -> f64 {
    linearize(rgba.r) * 0.2126 + linearize(rgba.g) * 0.7152 + linearize(rgba.b) * 0.0722
}

/// Contrast ratio between two colors, rounded to 2 decimals.
///
/// Alpha is ignored. The result is symmetric and ranges from 1 to 21.
///
/// ```
/// use shadegen::{contrast_ratio, Rgba};
/// let black = Rgba::rgb(0, 0, 0);
/// let white = Rgba::rgb(255, 255, 255);
/// assert_eq!(contrast_ratio(&black, &white), 21.0);
/// ```
pub fn contrast_ratio(foreground: &Rgba, background: &Rgba) -> f64 {
    let l1 = luminance(foreground);
    let l2 = luminance(background);
    round_to((l1.max(l2) + 0.05) / (l1.min(l2) + 0.05), 2)
}
