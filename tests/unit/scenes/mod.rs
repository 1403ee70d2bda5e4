use super::*;

#[test]
fn scenes_build_in_play_order() {
    let cfg = ReelConfig::default();
    let scenes = build_scenes(&cfg).unwrap();
    assert_eq!(
        scenes.iter().map(Scene::kind).collect::<Vec<_>>(),
        SceneKind::ALL
    );
    assert_eq!(
        scenes.iter().map(Scene::duration).collect::<Vec<_>>(),
        [120, 120, 120, 120, 150]
    );
}

#[test]
fn names_match_config_keys() {
    let cfg = ReelConfig::default();
    let keys: Vec<_> = cfg.durations.named().iter().map(|(k, _)| *k).collect();
    let names: Vec<_> = SceneKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names, keys);
}

#[test]
fn each_scene_roots_at_its_own_id() {
    let cfg = ReelConfig::default();
    for scene in build_scenes(&cfg).unwrap() {
        assert_eq!(scene.render(0).id, scene.kind().name());
    }
}

#[test]
fn a_failing_scene_fails_the_whole_build() {
    let mut cfg = ReelConfig::default();
    cfg.durations.social = 10;
    assert!(build_scenes(&cfg).is_err());
}
