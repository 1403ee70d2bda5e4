use super::*;

#[test]
fn defaults_match_the_shipped_cut() {
    let cfg = ReelConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.fps, Fps { num: 30, den: 1 });
    assert_eq!(cfg.canvas, Canvas { width: 1920, height: 1080 });
    assert_eq!(cfg.font_family, "Inter");
    assert_eq!(cfg.durations.total(), Some(630));
    assert_eq!(cfg.transition.duration_frames, 20);
    assert_eq!(
        cfg.transition.kind().unwrap(),
        TransitionKind::BlurDissolve { max_blur_px: 12.0 }
    );
    assert!(cfg.assets.hero_bg.ends_with("revid_hero_bg.png"));
    assert_eq!(cfg.palette.accent.to_hex(), "#4ade80ff");
}

#[test]
fn partial_json_overrides_merge_with_defaults() {
    let cfg = ReelConfig::from_json_str(
        r##"{ "durations": { "closing": 180 }, "palette": { "accent": "#00ff00" } }"##,
    )
    .unwrap();
    assert_eq!(cfg.durations.closing, 180);
    assert_eq!(cfg.durations.hero, 120);
    assert_eq!(cfg.palette.accent, Color::rgb(0, 255, 0));
    assert_eq!(cfg.palette.sky, Palette::default().sky);
    assert_eq!(cfg.font_family, "Inter");
}

#[test]
fn rejects_zero_scene_duration() {
    let err = ReelConfig::from_json_str(r#"{ "durations": { "phone": 0 } }"#).unwrap_err();
    assert!(err.to_string().contains("phone"));
}

#[test]
fn rejects_transition_longer_than_a_scene() {
    let mut cfg = ReelConfig::default();
    cfg.durations.features = 15;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("features"));

    cfg.durations.features = 20;
    assert!(cfg.validate().is_ok());
}

#[test]
fn rejects_bad_fps_kind_and_assets() {
    assert!(ReelConfig::from_json_str(r#"{ "fps": { "num": 30, "den": 0 } }"#).is_err());
    assert!(ReelConfig::from_json_str(r#"{ "transition": { "kind": "wipe" } }"#).is_err());
    assert!(ReelConfig::from_json_str(r#"{ "assets": { "hero_bg": " " } }"#).is_err());
    assert!(ReelConfig::from_json_str(r#"{ "font_family": "" }"#).is_err());
    assert!(matches!(
        ReelConfig::from_json_str("{ not json"),
        Err(ReelError::Serde(_))
    ));
}

#[test]
fn config_roundtrips_through_json() {
    let cfg = ReelConfig::default();
    let s = serde_json::to_string(&cfg).unwrap();
    assert_eq!(ReelConfig::from_json_str(&s).unwrap(), cfg);
}

#[test]
fn rejects_total_length_that_overflows() {
    let mut cfg = ReelConfig::default();
    cfg.durations.closing = u64::MAX;
    assert_eq!(cfg.durations.total(), None);
    assert!(cfg.validate().unwrap_err().to_string().contains("overflows"));
}
