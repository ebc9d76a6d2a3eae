use rdelivery::models::color::{Hsl, Rgb, hex_to_hsl, hsl_to_hex};

fn channel_distance(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

#[test]
fn test_primary_colors_convert_exactly() {
    assert_eq!(hex_to_hsl("#ff0000").unwrap().to_string(), "hsl(0, 100%, 50%)");
    assert_eq!(hex_to_hsl("#00ff00").unwrap().to_string(), "hsl(120, 100%, 50%)");
    assert_eq!(hex_to_hsl("#0000ff").unwrap().to_string(), "hsl(240, 100%, 50%)");
    assert_eq!(hex_to_hsl("#ffffff").unwrap().to_string(), "hsl(0, 0%, 100%)");
    assert_eq!(hex_to_hsl("#000000").unwrap().to_string(), "hsl(0, 0%, 0%)");
}

#[test]
fn test_realistic_theme_colors() {
    assert_eq!(hex_to_hsl("#f97316").unwrap().to_string(), "hsl(25, 95%, 53%)");
    assert_eq!(hex_to_hsl("#3B82F6").unwrap().to_bare(), "217 91% 60%");
    assert_eq!(hex_to_hsl("#1f2937").unwrap().to_bare(), "215 28% 17%");
}

#[test]
fn test_hex_forms_accepted() {
    let long = Rgb::from_hex("#ffaa00").unwrap();
    assert_eq!(Rgb::from_hex("fa0").unwrap(), long);
    assert_eq!(Rgb::from_hex("#FFAA00").unwrap(), long);
    assert_eq!(Rgb::from_hex(" ffaa00 ").unwrap(), long);
    assert_eq!(long.to_hex(), "#ffaa00");
}

#[test]
fn test_invalid_hex_is_rejected() {
    for bad in ["", "#", "#12345", "#gggggg", "#1234567", "#ффф"] {
        assert!(Rgb::from_hex(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn test_hex_roundtrip_through_hsl_is_lossless() {
    for r in (0..=255u8).step_by(17) {
        for g in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(51) {
                let rgb = Rgb { r, g, b };
                assert_eq!(Hsl::from_rgb(rgb).to_rgb(), rgb, "{}", rgb.to_hex());
            }
        }
    }
}

#[test]
fn test_rounded_hsl_text_stays_close_to_source() {
    for hex in [
        "#f97316", "#3b82f6", "#10b981", "#ef4444", "#6b7280", "#f3f4f6", "#777777",
    ] {
        let source = Rgb::from_hex(hex).unwrap();
        let text = hex_to_hsl(hex).unwrap().to_string();
        let back = Rgb::from_hex(&hsl_to_hex(&text).unwrap()).unwrap();
        assert!(channel_distance(source, back) <= 3, "{hex} -> {text}");
    }
}

#[test]
fn test_hsl_text_forms() {
    assert_eq!(hsl_to_hex("hsl(0, 100%, 50%)").unwrap(), "#ff0000");
    assert_eq!(hsl_to_hex("hsl(120 100% 50%)").unwrap(), "#00ff00");
    assert_eq!(hsl_to_hex("240 100% 50%").unwrap(), "#0000ff");
    assert_eq!(hsl_to_hex("HSL(360, 100%, 50%)").unwrap(), "#ff0000");
    assert_eq!(hsl_to_hex("hsl(-120, 100%, 50%)").unwrap(), "#0000ff");
    assert_eq!(hsl_to_hex("0 0% 100%").unwrap(), "#ffffff");
}

#[test]
fn test_invalid_hsl_is_rejected() {
    for bad in ["hsl(0, 120%, 50%)", "hsl(0, 50%)", "hsl(0, 50%, 50%", "red", "0 50 50"] {
        assert!(bad.parse::<Hsl>().is_err(), "accepted {bad:?}");
    }
}
