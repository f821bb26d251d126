//! shadegen: tint/shade palettes and color conversions for UI theming
//!
//! Two layers, leaf first:
//!
//! - [`color`]: stateless conversions between hex strings, [`Rgba`],
//!   [`Hsl`] and [`Hsv`], plus WCAG [`contrast_ratio`].
//! - [`ShadeGenerator`]: derives a fixed 19-entry palette from one base
//!   color and a per-shade multiplier table ([`ShadeConfig`]).
//!
//! # Quick Start
//!
//! ```
//! use shadegen::{ColorFormat, ShadeGenerator, ShadeKey};
//!
//! let mut generator = ShadeGenerator::new();
//! generator.hue("#336699")?;
//!
//! assert_eq!(generator.shade(ShadeKey::S500).hex(), "#1F3D5C");
//!
//! let palette = generator.shades_map(ColorFormat::Hex);
//! assert_eq!(palette[&ShadeKey::S100], "#336699");
//! assert_eq!(palette.len(), 19);
//! # Ok::<(), shadegen::ShadeError>(())
//! ```
//!
//! # Shade Keys
//!
//! | Keys | Kind | Formula per channel `c` |
//! |------|------|--------------------------|
//! | 10..90 | tint | `c + (255 - c) * m` |
//! | 100 | base | unchanged |
//! | 200..1000 | shade | `c * m` |
//!
//! The default multipliers run 0.9 down to 0.1 in both ranges, so `10` is
//! the lightest tint and `1000` the darkest shade. Results are rounded half
//! away from zero.
//!
//! # Strict vs. permissive parsing
//!
//! [`hex_to_rgba`] never fails: unknown lengths yield opaque black.
//! [`ShadeGenerator::hue`] only accepts `#RRGGBB` (via [`is_hex_color`])
//! and returns [`ShadeError::InvalidHue`] otherwise. `str::parse::<Rgba>()`
//! sits in between: 3, 6 or 8 digits, with a [`ParseColorError`] for
//! anything else.
//!
//! # Custom multipliers
//!
//! ```
//! use shadegen::{ShadeConfig, ShadeGenerator, ShadeKey};
//!
//! let config = ShadeConfig::default().with(ShadeKey::S500, 0.5);
//! let mut generator = ShadeGenerator::with_config(&config);
//! generator.hue("#336699")?;
//! assert_eq!(generator.hex_of(ShadeKey::S500), "#1A334D");
//! # Ok::<(), shadegen::ShadeError>(())
//! ```

pub mod color;
pub mod error;
pub mod generator;
pub mod models;

pub use color::{
    contrast_ratio, dec_to_hex, format_hsl, format_rgba, hex_opacity_to_alpha, hex_to_rgba,
    is_hex_color, parse_dec_alpha, rgb_to_hsl, rgb_to_hsv, rgba_to_hex, Hsl, Hsv, Rgba,
};
pub use error::{ParseColorError, ShadeError};
pub use generator::{generate_shade, ShadeEntry, ShadeGenerator};
pub use models::{ColorFormat, ShadeConfig, ShadeKey, DEFAULT_MULTIPLIERS};
