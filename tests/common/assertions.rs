//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use shadegen::{Rgba, ShadeGenerator, ShadeKey};

/// Assert every channel is non-increasing along `keys`
pub fn assert_darkening(generator: &ShadeGenerator, keys: &[ShadeKey]) {
    for pair in keys.windows(2) {
        let (a, b) = (generator.shade_value(pair[0]), generator.shade_value(pair[1]));
        for (ca, cb) in a.channels().into_iter().zip(b.channels()) {
            assert!(
                cb <= ca,
                "Expected {} to be no lighter than {}: {} vs {}",
                pair[1],
                pair[0],
                b,
                a
            );
        }
    }
}

/// Assert every channel is non-decreasing along `keys`
pub fn assert_lightening(generator: &ShadeGenerator, keys: &[ShadeKey]) {
    for pair in keys.windows(2) {
        let (a, b) = (generator.shade_value(pair[0]), generator.shade_value(pair[1]));
        for (ca, cb) in a.channels().into_iter().zip(b.channels()) {
            assert!(
                cb >= ca,
                "Expected {} to be no darker than {}: {} vs {}",
                pair[1],
                pair[0],
                b,
                a
            );
        }
    }
}

/// Assert a color's channels, ignoring alpha
pub fn assert_channels(color: Rgba, expected: [u8; 3]) {
    assert_eq!(color.channels(), expected, "Unexpected channels for {}", color);
}
