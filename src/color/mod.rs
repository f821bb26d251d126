//! Color types and conversion functions
//!
//! Everything here is stateless. Hex strings, [`Rgba`] records and the
//! derived [`Hsl`]/[`Hsv`] projections convert into each other through plain
//! functions.
//!
//! # Example
//!
//! ```
//! use shadegen::{hex_to_rgba, rgb_to_hsl, rgba_to_hex};
//!
//! let color = hex_to_rgba("#336699");
//! assert_eq!(rgba_to_hex(&color, true, false), "#336699");
//! assert_eq!(rgb_to_hsl(&color).to_string(), "hsl(210deg, 50%, 40%)");
//! ```

mod contrast;
mod convert;
mod rgba;

pub use contrast::contrast_ratio;
pub use convert::{
    dec_to_hex, format_hsl, format_rgba, hex_opacity_to_alpha, hex_to_rgba, is_hex_color,
    parse_dec_alpha, rgb_to_hsl, rgb_to_hsv, rgba_to_hex,
};
pub(crate) use convert::round_to;
pub use rgba::{Hsl, Hsv, Rgba};
