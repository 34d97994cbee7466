use super::*;

#[test]
fn numbers_render_like_plain_decimals() {
    assert_eq!(format_num(320.0), "320");
    assert_eq!(format_num(1.0), "1");
    assert_eq!(format_num(0.5), "0.5");
    assert_eq!(format_num(-12.25), "-12.25");
    assert_eq!(format_num(-0.0), "0");
}

#[test]
fn header_codes_match_defaults() {
    assert_eq!(Origin::default().code(), 0);
    assert_eq!(Layer::default().code(), 0);
    assert_eq!(Layer::Foreground.code(), 3);
    assert_eq!(Origin::BottomRight.code(), 8);
}

#[test]
fn params_display() {
    assert_eq!(Param::from(0.75).to_string(), "0.75");
    assert_eq!(Param::from(255u8).to_string(), "255");
    assert_eq!(Param::from(ParameterFlag::Additive).to_string(), "A");
}

#[test]
fn origin_and_layer_deserialize_by_name() {
    let o: Origin = serde_json::from_str("\"TopLeft\"").unwrap();
    let l: Layer = serde_json::from_str("\"Foreground\"").unwrap();
    assert_eq!(o, Origin::TopLeft);
    assert_eq!(l, Layer::Foreground);
}
