//! End-to-end scenarios across the color engines.
//!
//! These tests exercise the public API the way a consumer would: parse or
//! construct a color, run it through an engine, check the observable result.

use approx::assert_relative_eq;
use chroma_core::{hex, Color};
use chroma_ops::{blend, contrast, derive, gradient, palette, BlendMode, OpsError};

#[test]
fn test_analogous_palette_of_pure_red() {
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    assert_eq!(red.hue(), 0.0);

    let [first, plus, minus] = palette::analogous(red);
    assert_eq!(first, red);
    assert_relative_eq!(plus.hue(), 1.0 / 12.0, epsilon = 1e-5);
    assert_relative_eq!(minus.hue(), 11.0 / 12.0, epsilon = 1e-5);
    for c in [plus, minus] {
        assert_relative_eq!(c.saturation(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(c.brightness(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_gradient_midpoint_of_black_and_white() {
    let mid = gradient::color_at(0.5, Color::BLACK, Color::WHITE);
    assert_eq!(mid.components(), [0.5, 0.5, 0.5, 1.0]);
}

#[test]
fn test_parsed_hex_flows_through_contrast() {
    let bg = hex::parse("#1A1A2E").expect("valid hex");
    let text = contrast::contrasting_text_color(bg);
    assert_eq!(text, Color::WHITE);
    assert!(contrast::is_accessible(text, bg));
}

#[test]
fn test_hex_pattern_shorthand_matches_expanded_form() {
    let short = hex::parse("FFA").expect("valid hex");
    let long = hex::parse("FFAFFA").expect("valid hex");
    assert_eq!(short, long);
    assert_eq!(hex::format(short), "FFAFFA");
}

#[test]
fn test_contrast_extremes() {
    assert_relative_eq!(
        contrast::contrast_ratio(Color::BLACK, Color::WHITE),
        21.0,
        epsilon = 0.01
    );
    assert!(contrast::is_accessible(Color::BLACK, Color::WHITE));
    assert!(!contrast::is_accessible(Color::ORANGE, Color::ORANGE));
}

#[test]
fn test_multi_stop_gradient_walks_every_segment() {
    let stops = [
        hex::parse("FF0000").expect("valid hex"),
        hex::parse("00FF00").expect("valid hex"),
        hex::parse("0000FF").expect("valid hex"),
    ];
    // stop positions land exactly on the stops
    assert_eq!(gradient::color_within(0.0, &stops).unwrap(), stops[0]);
    assert_eq!(gradient::color_within(0.5, &stops).unwrap(), stops[1]);
    assert_eq!(gradient::color_within(1.0, &stops).unwrap(), stops[2]);
    // a single stop is rejected, not silently treated as constant
    assert_eq!(
        gradient::color_within(0.5, &stops[..1]),
        Err(OpsError::DegenerateGradient(1))
    );
}

#[test]
fn test_blend_then_inspect_roundtrip() {
    let backdrop = hex::parse("808080").expect("valid hex");
    let out = blend::blend(backdrop, backdrop, BlendMode::Multiply);
    let expected = (128.0f32 / 255.0) * (128.0 / 255.0);
    for channel in &out.components()[..3] {
        assert_relative_eq!(*channel, expected, epsilon = 1e-5);
    }
    assert_eq!(out.alpha(), 1.0);
}

#[test]
fn test_string_color_survives_the_full_pipeline() {
    let seed = derive::color_for_string("user@example.com", None);
    // derived colors are solid and opaque, so every engine accepts them
    assert!(!seed.is_pattern_based());
    assert_eq!(seed.alpha(), 1.0);

    let readable = contrast::contrasting_text_color(seed);
    assert!(readable == Color::BLACK || readable == Color::WHITE);

    let comp = palette::complementary(seed);
    let faded = gradient::color_at(0.25, seed, comp);
    let [r, g, b, a] = faded.components();
    for v in [r, g, b, a] {
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn test_rgb_hsb_roundtrip_through_the_value_type() {
    for hex_code in ["0F3460", "E94560", "53354A", "903749", "2B2E4A"] {
        let c = hex::parse(hex_code).expect("valid hex");
        let [h, s, b] = c.hsb_components();
        let back = Color::from_hsb(h, s, b, c.alpha());
        for (x, y) in c.components().iter().zip(back.components().iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-5);
        }
        assert_eq!(hex::format(back), hex_code);
    }
}
