//! End-to-end behavior of the public parsing and formatting surface.

use tincture_core::color_management::{hsl, oklab};
use tincture_core::{ColorSyntax, ColorValue, CssFormat, ParseError, Rgb, parse_color};

fn assert_rgb_close(actual: Rgb, expected: Rgb, tol: f64) {
    let pairs = [
        (actual.r, expected.r),
        (actual.g, expected.g),
        (actual.b, expected.b),
        (actual.a, expected.a),
    ];
    for (i, (a, e)) in pairs.into_iter().enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "component {} mismatch: got {}, expected {}, tol {}",
            i,
            a,
            e,
            tol
        );
    }
}

fn rgb_of(input: &str) -> Rgb {
    parse_color(input)
        .unwrap_or_else(|e| panic!("{input:?} should parse: {e}"))
        .to_rgb()
}

/// Every 17th step on each axis, plus a few alphas.
fn rgb_grid() -> Vec<Rgb> {
    let steps: Vec<f64> = (0..=15).map(|i| f64::from(i * 17)).collect();
    let mut out = Vec::new();
    for &r in &steps {
        for &g in &steps {
            for &b in &steps {
                out.push(Rgb::opaque(r, g, b));
            }
        }
    }
    out.push(Rgb::new(12.0, 34.0, 56.0, 0.0));
    out.push(Rgb::new(200.0, 100.0, 50.0, 0.42));
    out
}

#[test]
fn oklab_roundtrip_within_one_step_per_channel() {
    for rgb in rgb_grid() {
        let back = oklab::oklab_to_rgb(&oklab::rgb_to_oklab(&rgb), rgb.a);
        let rounded = Rgb::new(back.r.round(), back.g.round(), back.b.round(), back.a);
        assert_rgb_close(rounded, rgb, 1.0);
    }
}

#[test]
fn oklch_polar_roundtrip_preserves_oklab() {
    for rgb in rgb_grid() {
        let lab = oklab::rgb_to_oklab(&rgb);
        let lch = oklab::oklab_to_oklch(&lab, rgb.a);
        let back = oklab::oklch_to_oklab(&lch);
        if lch.c < 1e-12 {
            assert_eq!(lch.h, 0.0);
            continue;
        }
        assert!((back.l - lab.l).abs() < 1e-9);
        assert!((back.a - lab.a).abs() < 1e-9);
        assert!((back.b - lab.b).abs() < 1e-9);
    }
}

#[test]
fn hsl_roundtrip_within_one_step_per_channel() {
    for rgb in rgb_grid() {
        let back = hsl::hsl_to_rgb(&hsl::rgb_to_hsl(&rgb));
        assert_rgb_close(back, rgb, 1.0);
        let h = hsl::rgb_to_hsl(&rgb).h;
        assert!((0.0..360.0).contains(&h), "hue {h} out of range for {rgb:?}");
    }
}

#[test]
fn hex_inputs() {
    assert_eq!(rgb_of("#FF0000"), Rgb::opaque(255.0, 0.0, 0.0));
    assert_eq!(rgb_of("#F00"), Rgb::opaque(255.0, 0.0, 0.0));
    let translucent = rgb_of("#FF000080");
    assert!((translucent.a - 128.0 / 255.0).abs() < 1e-9);
    assert!((translucent.a - 0.502).abs() < 1e-3);
}

#[test]
fn functional_rgb_inputs() {
    assert_eq!(rgb_of("rgb(255 0 0)"), rgb_of("rgb(255,0,0)"));
    assert_eq!(rgb_of("rgb(100% 0% 0%)"), Rgb::opaque(255.0, 0.0, 0.0));
    assert_eq!(rgb_of("rgba(0,0,0,0.5)").a, 0.5);
}

#[test]
fn hsl_inputs_resolve_to_primaries() {
    assert_eq!(rgb_of("hsl(0 100% 50%)"), Rgb::opaque(255.0, 0.0, 0.0));
    assert_eq!(rgb_of("hsl(120deg 100% 50%)"), Rgb::opaque(0.0, 255.0, 0.0));
}

#[test]
fn oklch_parses_and_formats_back() {
    let value = parse_color("oklch(70% 0.1 30)").unwrap();
    let lch = value.to_oklch();
    assert!((lch.l - 0.7).abs() < 1e-12);
    assert!((lch.c - 0.1).abs() < 1e-12);
    assert!((lch.h - 30.0).abs() < 1e-12);
    assert_eq!(lch.a, 1.0);
    assert_eq!(value.preferred_format(), CssFormat::Oklch);
    assert_eq!(value.to_css(), "oklch(70% 0.1 30)");
}

#[test]
fn display_p3_red_lands_near_srgb_red() {
    let value = parse_color("color(display-p3 1 0 0)").unwrap();
    let rgb = value.to_rgb();
    assert!((rgb.r - 255.0).abs() < 1.0);
    assert!(rgb.g < 1.0 && rgb.b < 1.0);
    assert_eq!(value.to_css(), "color(display-p3 1 0 0)");
}

#[test]
fn malformed_inputs_fail_without_nan() {
    for bad in [
        "#ZZZ",
        "rgb(1,2)",
        "oklch(1 2)",
        "notacolor",
        "",
        "rgb(NaN 0 0)",
        "rgb(Infinity 0 0)",
        "hsl(inf 10% 10%)",
        "color(display-p3 1e999 0 0)",
        "oklch(0.5 0.1 30 / nan)",
        "rgb(100 %, 0%, 0%)",
        "rgba(0,0,0, 50 %)",
        "hsl(0, 100 %, 50 %)",
    ] {
        match parse_color(bad) {
            Err(ParseError::Unsupported { input }) => assert_eq!(input, bad),
            other => panic!("{bad:?} should fail, got {other:?}"),
        }
    }
}

#[test]
fn alpha_segment_appears_only_when_translucent() {
    let cases = [
        ("rgb(10 20 30)", "rgb(10 20 30)"),
        ("rgb(10 20 30 / 1)", "rgb(10 20 30)"),
        ("rgb(10 20 30 / 150%)", "rgb(10 20 30)"),
        ("rgb(10 20 30 / 0.123456)", "rgb(10 20 30 / 0.1235)"),
        ("hsl(10 20% 30%)", "hsl(10 20% 30%)"),
        ("hsl(10 20% 30% / 0.5)", "hsl(10 20% 30% / 0.5)"),
        ("oklch(0.5 0.1 10 / 0.25)", "oklch(50% 0.1 10 / 0.25)"),
        ("color(display-p3 0.1 0.2 0.3 / 0%)", "color(display-p3 0.1 0.2 0.3 / 0)"),
        ("color(display-p3 0.1 0.2 0.3)", "color(display-p3 0.1 0.2 0.3)"),
    ];
    for (input, expected) in cases {
        assert_eq!(parse_color(input).unwrap().to_css(), expected, "input {input:?}");
    }
}

#[test]
fn hex_renders_through_rgb_notation() {
    let value = parse_color("#0a0b0c80").unwrap();
    assert_eq!(value.preferred_format(), ColorSyntax::Hex.preferred_format());
    assert_eq!(value.to_css(), "rgb(10 11 12 / 0.502)");
    assert_eq!(value.to_hex(), "#0A0B0C80");
}

#[test]
fn conversions_across_notations_are_consistent() {
    let value: ColorValue = "hsl(210 60% 40%)".parse().unwrap();
    let via_hex = parse_color(&value.to_hex()).unwrap();
    assert_rgb_close(via_hex.to_rgb(), value.to_rgb(), 1e-9);

    let from_oklch = parse_color(&ColorValue::from_oklch(value.to_oklch()).to_css()).unwrap();
    assert_rgb_close(from_oklch.to_rgb(), value.to_rgb(), 1.0);
}
