//! End-to-end palette generation through the public generator API.

mod common;

use pretty_assertions::assert_eq;
use shadegen::{
    generate_shade, hex_to_rgba, ColorFormat, Rgba, ShadeConfig, ShadeError, ShadeGenerator,
    ShadeKey,
};

use common::fixtures::{self, hues, BASE_TO_DARKEST, TINTS_LIGHT_TO_BASE};

#[test]
fn test_scenario_shade_500_of_steel_blue() {
    common::init_tracing();
    let mut generator = ShadeGenerator::new();
    let hex = generator
        .hue(hues::STEEL_BLUE)
        .unwrap()
        .shade(ShadeKey::S500)
        .hex();

    assert_eq!(generator.base_color(), Rgba::new(51, 102, 153, 1.0));
    assert_eq!(hex, "#1F3D5C");
}

#[test]
fn test_scenario_tint_90_of_white() {
    let mut generator = fixtures::generator_for(hues::WHITE);
    assert_eq!(generator.shade(ShadeKey::S90).rgba(), "rgb(255, 255, 255)");
}

#[test]
fn test_scenario_three_digit_hue_rejected() {
    let mut generator = ShadeGenerator::new();
    let err = generator.hue("#FFF").unwrap_err();
    assert!(matches!(err, ShadeError::InvalidHue(_)));
    assert_eq!(err.to_string(), "The color: #FFF you provided is not valid");
}

#[test]
fn test_scenario_opacity_touches_only_cursor() {
    let mut generator = fixtures::generator_for(hues::STEEL_BLUE);
    let before_300 = generator.shade_value(ShadeKey::S300);

    generator.shade(ShadeKey::S200).opacity(0.5);

    assert_eq!(generator.shade_value(ShadeKey::S200).a, Some(0.5));
    assert_eq!(generator.shade_value(ShadeKey::S300), before_300);
    for key in ShadeKey::ALL.into_iter().filter(|k| *k != ShadeKey::S200) {
        assert_eq!(generator.shade_value(key).a, Some(1.0), "shade {key}");
    }
}

#[test]
fn test_base_entry_equals_base_color_for_any_config() {
    let configs = [
        ShadeConfig::default(),
        ShadeConfig::default().with(ShadeKey::S100, 0.75),
        ShadeConfig::default().with(ShadeKey::S100, 1.0),
    ];
    for config in &configs {
        for hex in fixtures::sample_hex_colors() {
            let mut generator = ShadeGenerator::with_config(config);
            generator.hue(&hex).unwrap();
            assert_eq!(generator.generate_shade(ShadeKey::S100), generator.base_color());
            assert_eq!(generator.shade_value(ShadeKey::S100), hex_to_rgba(&hex));
        }
    }
}

#[test]
fn test_palette_is_monotonic() {
    for hex in fixtures::sample_hex_colors() {
        let generator = fixtures::generator_for(&hex);
        common::assert_darkening(&generator, &BASE_TO_DARKEST);

        let mut toward_lightest = TINTS_LIGHT_TO_BASE;
        toward_lightest.reverse();
        common::assert_lightening(&generator, &toward_lightest);
    }
}

#[test]
fn test_extremes_of_default_palette() {
    let black = fixtures::generator_for(hues::BLACK);
    common::assert_channels(black.shade_value(ShadeKey::S10), [230, 230, 230]);
    common::assert_channels(black.shade_value(ShadeKey::S1000), [0, 0, 0]);

    let white = fixtures::generator_for(hues::WHITE);
    common::assert_channels(white.shade_value(ShadeKey::S10), [255, 255, 255]);
    common::assert_channels(white.shade_value(ShadeKey::S1000), [26, 26, 26]);
}

#[test]
fn test_hue_is_case_insensitive() {
    let lower = fixtures::generator_for(hues::CORAL);
    let upper = fixtures::generator_for(&hues::CORAL.to_uppercase());
    assert_eq!(
        lower.shades_map(ColorFormat::Hex),
        upper.shades_map(ColorFormat::Hex)
    );
}

#[test]
fn test_shades_map_order_and_formats() {
    let generator = fixtures::generator_for(hues::STEEL_BLUE);

    let hex = generator.shades_map(ColorFormat::Hex);
    let keys: Vec<String> = hex.keys().map(|k| k.to_string()).collect();
    assert_eq!(
        keys,
        [
            "10", "20", "30", "40", "50", "60", "70", "80", "90", "100", "200", "300", "400",
            "500", "600", "700", "800", "900", "1000"
        ]
    );
    assert_eq!(hex[&ShadeKey::S100], "#336699");
    assert_eq!(hex[&ShadeKey::S500], "#1F3D5C");
    assert_eq!(hex[&ShadeKey::S50], "#99B3CC");

    let rgba = generator.shades_map(ColorFormat::Rgba);
    assert_eq!(rgba[&ShadeKey::S500], "rgb(31, 61, 92)");

    let hsl = generator.shades_map(ColorFormat::Hsl);
    assert_eq!(hsl[&ShadeKey::S100], "hsl(210deg, 50%, 40%)");
}

#[test]
fn test_shades_map_reflects_opacity() {
    let mut generator = fixtures::generator_for(hues::OLIVE);
    generator.opacity_at(ShadeKey::S700, 0.2);

    let rgba = generator.shades_map(ColorFormat::Rgba);
    assert_eq!(rgba[&ShadeKey::S700], "rgba(51, 51, 0, 0.2)");
    assert_eq!(rgba[&ShadeKey::S800], "rgb(38, 38, 0)");

    let hex = generator.shades_map(ColorFormat::Hex);
    assert_eq!(hex[&ShadeKey::S700], "#33330033");
}

#[test]
fn test_format_selector_from_string() {
    let generator = fixtures::generator_for(hues::STEEL_BLUE);
    let format: ColorFormat = "hex".parse().unwrap();
    assert_eq!(generator.shades_map(format).len(), 19);
    assert!(matches!(
        "rgb".parse::<ColorFormat>(),
        Err(ShadeError::UnknownFormat(_))
    ));
}

#[test]
fn test_explicit_key_forms_match_cursor_forms() {
    let mut generator = fixtures::generator_for(hues::CORAL);
    for key in ShadeKey::ALL {
        generator.shade(key);
        assert_eq!(generator.hex(), generator.hex_of(key));
        assert_eq!(generator.rgba(), generator.rgba_of(key));
        assert_eq!(generator.hsl(), generator.hsl_of(key));
        assert_eq!(generator.hsv(), generator.hsv_of(key));
        assert_eq!(generator.current_shade_value(), generator.shade_value(key));
    }
}

#[test]
fn test_override_color_rendering() {
    let generator = fixtures::generator_for(hues::STEEL_BLUE);
    let other = Rgba::new(255, 0, 0, 0.5);
    assert_eq!(ColorFormat::Rgba.render(&other), "rgba(255, 0, 0, 0.5)");
    assert_eq!(ColorFormat::Hex.render(&other), "#FF000080");
    assert_eq!(ColorFormat::Hsl.render(&other), "hsl(0deg, 100%, 50%)");
    // The generator itself is unaffected
    assert_eq!(generator.hex(), "#336699");
}

#[test]
fn test_free_generate_shade_matches_generator() {
    let config = ShadeConfig::default();
    let generator = fixtures::generator_for(hues::CORAL);
    let base = generator.base_color();
    for (key, multiplier) in config.iter() {
        assert_eq!(generate_shade(&base, key, multiplier), generator.shade_value(key));
    }
}

#[test]
fn test_yaml_config_drives_palette() {
    let yaml = r#"
10: 0.5
20: 0.5
30: 0.5
40: 0.5
50: 0.5
60: 0.5
70: 0.5
80: 0.5
90: 0.5
100: 0
200: 0.5
300: 0.5
400: 0.5
500: 0.5
600: 0.5
700: 0.5
800: 0.5
900: 0.5
1000: 0.5
"#;
    let config = ShadeConfig::from_yaml_str(yaml).unwrap();
    let mut generator = ShadeGenerator::new();
    generator.config(&config).hue(hues::STEEL_BLUE).unwrap();

    assert_eq!(generator.multipliers(), config);
    assert_eq!(generator.hex_of(ShadeKey::S10), generator.hex_of(ShadeKey::S90));
    assert_eq!(generator.hex_of(ShadeKey::S1000), "#1A334D");
}

#[test]
fn test_config_requires_hue_to_take_effect() {
    let mut generator = fixtures::generator_for(hues::STEEL_BLUE);
    let before = generator.shades_map(ColorFormat::Hex);

    generator.config(&ShadeConfig::default().with(ShadeKey::S200, 0.1));
    assert_eq!(generator.shades_map(ColorFormat::Hex), before);

    generator.hue(hues::STEEL_BLUE).unwrap();
    assert_eq!(generator.hex_of(ShadeKey::S200), "#050A0F");
}

#[test]
fn test_shades_json_export() {
    let generator = fixtures::generator_for(hues::STEEL_BLUE);
    let json = generator.shades_json(ColorFormat::Hex).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["500"], "#1F3D5C");
    assert_eq!(value["100"], "#336699");
    assert_eq!(value.as_object().unwrap().len(), 19);
}

#[test]
fn test_generators_are_independent() {
    let mut a = fixtures::generator_for(hues::STEEL_BLUE);
    let b = fixtures::generator_for(hues::CORAL);
    a.shade(ShadeKey::S900).opacity(0.1);
    assert_eq!(b.current_shade(), ShadeKey::S100);
    assert_eq!(b.shade_value(ShadeKey::S900).a, Some(1.0));
}

#[test]
fn test_cursor_before_any_hue_reads_black() {
    let mut generator = ShadeGenerator::new();
    assert_eq!(generator.hex(), "#000000");
    assert_eq!(generator.shade(ShadeKey::S10).rgba(), "rgb(0, 0, 0)");
}
