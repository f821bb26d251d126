//! Test fixtures and constants.

use shadegen::{ShadeGenerator, ShadeKey};

/// Base colors used across the palette tests
pub mod hues {
    /// Mid-saturation blue used in the reference scenarios
    pub const STEEL_BLUE: &str = "#336699";

    pub const WHITE: &str = "#FFFFFF";

    pub const BLACK: &str = "#000000";

    /// Lower-case input to check case-insensitivity
    pub const CORAL: &str = "#ff7f50";

    pub const OLIVE: &str = "#808000";
}

/// Keys from the lightest tint to the base
pub const TINTS_LIGHT_TO_BASE: [ShadeKey; 10] = [
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
];

/// Keys from the base to the darkest shade
pub const BASE_TO_DARKEST: [ShadeKey; 10] = [
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

/// Generator with the default table and `hue` applied
pub fn generator_for(hue: &str) -> ShadeGenerator {
    let mut generator = ShadeGenerator::new();
    generator
        .hue(hue)
        .unwrap_or_else(|e| panic!("fixture hue {hue} rejected: {e}"));
    generator
}

/// A stepped sample of 6-digit hex strings covering the channel range
pub fn sample_hex_colors() -> Vec<String> {
    (0..=255u16)
        .step_by(5)
        .map(|v| {
            let v = v as u8;
            format!("#{:02X}{:02x}{:02X}", v, 255 - v, v.wrapping_mul(7))
        })
        .collect()
}
