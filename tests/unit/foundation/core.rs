use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap().is_empty());
}

#[test]
fn fps_secs_frames_are_unrounded() {
    let fps = Fps::new(30, 1).unwrap();
    assert!((fps.secs_to_frames(0.08) - 2.4).abs() < 1e-12);
    assert!((fps.frames_to_secs(45.0) - 1.5).abs() < 1e-12);
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn color_hex_parses_and_prints() {
    let c = Color::parse_hex("#4ade80").unwrap();
    assert_eq!(c, Color::rgb(0x4a, 0xde, 0x80));
    assert_eq!(c.to_hex(), "#4ade80ff");

    let c = Color::parse_hex("0A0A0F80").unwrap();
    assert_eq!(c.a, 0x80);

    assert!(Color::parse_hex("#fff").is_err());
    assert!(Color::parse_hex("#zzzzzz").is_err());
}

#[test]
fn color_serde_uses_hex_strings() {
    let c: Color = serde_json::from_value(serde_json::json!("#38bdf8")).unwrap();
    assert_eq!(serde_json::to_value(c).unwrap(), serde_json::json!("#38bdf8ff"));
}

#[test]
fn transform_helpers_compose() {
    let t = Transform2D::default()
        .with_translate(0.0, 30.0)
        .with_scale(0.85);
    assert_eq!(t.rotation_rad, 0.0);
    assert_eq!(t.anchor, Transform2D::default().anchor);
    assert_eq!(t.translate, Vec2::new(0.0, 30.0));
    assert_eq!(t.scale, Vec2::new(0.85, 0.85));
    let r = Transform2D::default().with_rotation_deg(180.0);
    assert!((r.rotation_rad - std::f64::consts::PI).abs() < 1e-12);
}
