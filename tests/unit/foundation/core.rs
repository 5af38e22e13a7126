use super::*;

#[test]
fn hex_and_triple_forms_parse_to_same_color() {
    let a: Rgb8 = "#5f5bff".parse().unwrap();
    let b: Rgb8 = "5F5BFF".parse().unwrap();
    let c: Rgb8 = "95, 91, 255".parse().unwrap();
    assert_eq!(a, Rgb8::new(95, 91, 255));
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn malformed_colors_are_rejected() {
    for bad in ["", "#12345", "#gg0000", "1,2", "1,2,300", "#5f5bff00"] {
        let err = bad.parse::<Rgb8>().unwrap_err();
        assert!(err.to_string().contains("validation error:"), "{bad}");
    }
}

#[test]
fn color_serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgb8::new(95, 91, 255)).unwrap();
    assert_eq!(json, "\"#5f5bff\"");
    let back: Rgb8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Rgb8::new(95, 91, 255));
}

#[test]
fn canvas_rgba_len_checks_overflow() {
    assert_eq!(Canvas::square(4).rgba_len().unwrap(), 64);
    assert_eq!(
        Canvas {
            width: 3,
            height: 0
        }
        .rgba_len()
        .unwrap(),
        0
    );
    assert!(Canvas::square(u32::MAX).rgba_len().is_err());
}
