use super::*;
use crate::scene::model::NodeKind;

fn scene() -> PhoneScene {
    PhoneScene::new(&ReelConfig::default()).unwrap()
}

#[test]
fn phone_rises_from_below() {
    let s = scene();
    let root = s.render(0);
    let device = root.find("phone.device").unwrap();
    assert_eq!(device.opacity, 0.0);
    assert_eq!(device.transform.translate.y, 120.0);

    let root = s.render(119);
    let device = root.find("phone.device").unwrap();
    assert_eq!(device.opacity, 1.0);
    let float = (119.0f64 * 0.04).sin() * 6.0;
    assert!((device.transform.translate.y - float).abs() < 0.5);
}

#[test]
fn stats_slide_in_from_the_left() {
    let s = scene();
    assert_eq!(
        s.stats().iter().map(|st| st.delay).collect::<Vec<_>>(),
        [20.0, 28.0, 36.0]
    );

    let root = s.render(24);
    let stat = |i: usize| root.find(&format!("phone.stat.{i}")).unwrap();
    assert!(stat(0).opacity > 0.0);
    assert!(stat(0).transform.translate.x > -40.0);
    assert_eq!(stat(1).opacity, 0.0);
    assert_eq!(stat(1).transform.translate.x, -40.0);
}

#[test]
fn stat_value_pulses_relative_to_its_delay() {
    let root = scene().render(50);
    let scale = root
        .find("phone.stat.1.value")
        .map(|n| n.transform.scale.x)
        .unwrap();
    assert!((scale - (1.0 + (22.0f64 * 0.08).sin() * 0.02)).abs() < 1e-12);
}

#[test]
fn copy_reveals_after_its_start() {
    let s = scene();
    let root = s.render(0);
    let Some(NodeKind::Text(t)) = root.find("phone.eyebrow").map(|n| &n.kind) else {
        panic!("eyebrow is not text");
    };
    assert!(t.runs.iter().all(|r| r.opacity == 0.0));
    assert!(t.uppercase);

    let root = s.render(119);
    assert_eq!(
        root.find("phone.headline").and_then(Node::text).as_deref(),
        Some("Designed for the platforms you love")
    );
}

#[test]
fn mockup_shows_the_configured_screen() {
    let cfg = ReelConfig::default();
    let root = PhoneScene::new(&cfg).unwrap().render(60);
    let Some(NodeKind::Image(img)) = root.find("phone.screen.img").map(|n| &n.kind) else {
        panic!("screen is not an image");
    };
    assert_eq!(img.src, cfg.assets.phone_screen);
}

#[test]
fn rejects_duration_that_ends_before_the_last_stat() {
    let mut cfg = ReelConfig::default();
    cfg.durations.phone = 36;
    let err = PhoneScene::new(&cfg).unwrap_err();
    assert!(err.to_string().contains("phone.stat.2"));
}
