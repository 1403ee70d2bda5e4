use super::*;
use crate::scene::model::NodeKind;

fn scene() -> HeroScene {
    HeroScene::new(&ReelConfig::default()).unwrap()
}

fn runs_opacity(root: &Node, id: &str) -> Vec<f64> {
    match root.find(id).map(|n| &n.kind) {
        Some(NodeKind::Text(t)) => t.runs.iter().map(|r| r.opacity).collect(),
        other => panic!("{id}: unexpected {other:?}"),
    }
}

#[test]
fn first_frame_shows_only_the_logo_starting() {
    let root = scene().render(0);
    assert_eq!(root.id, "hero");
    assert_eq!(root.find("hero.logo").map(|n| n.opacity), Some(0.0));
    assert_eq!(root.find("hero.cta").map(|n| n.opacity), Some(0.0));
    assert!(runs_opacity(&root, "hero.headline").iter().all(|&o| o == 0.0));
    assert!(runs_opacity(&root, "hero.tagline").iter().all(|&o| o == 0.0));
}

#[test]
fn headline_reveal_starts_at_frame_eighteen() {
    let s = scene();
    assert!(runs_opacity(&s.render(18), "hero.headline").iter().all(|&o| o == 0.0));
    let later = runs_opacity(&s.render(19), "hero.headline");
    assert!(later[0] > 0.0);
    assert_eq!(*later.last().unwrap_or(&1.0), 0.0);
}

#[test]
fn everything_is_visible_by_the_last_frame() {
    let root = scene().render(119);
    assert_eq!(root.find("hero.logo").map(|n| n.opacity), Some(1.0));
    assert_eq!(root.find("hero.cta").map(|n| n.opacity), Some(1.0));
    assert!(runs_opacity(&root, "hero.headline").iter().all(|&o| o == 1.0));
    assert!(runs_opacity(&root, "hero.tagline").iter().all(|&o| (o - 1.0).abs() < 1e-9));
    let cta_y = root.find("hero.cta").map(|n| n.transform.translate.y).unwrap_or(f64::NAN);
    assert!(cta_y.abs() < 1.0);
}

#[test]
fn headline_keeps_accent_word() {
    let root = scene().render(60);
    assert_eq!(
        root.find("hero.headline").and_then(Node::text).as_deref(),
        Some("Create Viral Videos in Minutes")
    );
}

#[test]
fn rendering_is_idempotent() {
    let s = scene();
    for f in [0, 37, 55, 119] {
        assert_eq!(s.render(f), s.render(f));
    }
}

#[test]
fn rejects_duration_shorter_than_reveals() {
    let mut cfg = ReelConfig::default();
    cfg.durations.hero = 40;
    assert!(HeroScene::new(&cfg).is_err());
}

#[test]
fn rejects_duration_that_ends_before_the_cta() {
    let mut cfg = ReelConfig::default();
    cfg.durations.hero = 50;
    let err = HeroScene::new(&cfg).unwrap_err();
    assert!(err.to_string().contains("hero.cta"));
}
