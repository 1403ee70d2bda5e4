use super::*;

fn timeline() -> Timeline {
    Timeline::build(&ReelConfig::default()).unwrap()
}

#[test]
fn total_is_the_sum_of_scene_durations() {
    let t = timeline();
    assert_eq!(t.total_frames(), 630);
    assert_eq!(t.scenes().len(), 5);
    assert_eq!(t.full_range().len_frames(), 630);
}

#[test]
fn locate_scene_bodies_and_transitions() {
    let t = timeline();
    assert_eq!(
        t.locate(FrameIndex(0)).unwrap(),
        Segment::Scene { index: 0, local: 0 }
    );
    assert_eq!(
        t.locate(FrameIndex(119)).unwrap(),
        Segment::Scene { index: 0, local: 119 }
    );
    assert_eq!(
        t.locate(FrameIndex(120)).unwrap(),
        Segment::Transition {
            from: 0,
            to: 1,
            from_local: 119,
            to_local: 0,
            progress: 0.0
        }
    );
    assert_eq!(
        t.locate(FrameIndex(125)).unwrap(),
        Segment::Transition {
            from: 0,
            to: 1,
            from_local: 119,
            to_local: 5,
            progress: 0.25
        }
    );
    assert_eq!(
        t.locate(FrameIndex(140)).unwrap(),
        Segment::Scene { index: 1, local: 20 }
    );
    assert_eq!(
        t.locate(FrameIndex(629)).unwrap(),
        Segment::Scene { index: 4, local: 149 }
    );
}

#[test]
fn frames_past_the_end_are_rejected() {
    let t = timeline();
    for f in [630, 631, u64::MAX] {
        let err = t.locate(FrameIndex(f)).unwrap_err();
        assert!(matches!(err, ReelError::Evaluation(_)));
        assert!(t.render(FrameIndex(f)).is_err());
    }
}

#[test]
fn every_frame_has_exactly_one_owner_with_local_frames_in_range() {
    let t = timeline();
    let spans = t.segments();
    let mut next = 0;
    for s in &spans {
        assert_eq!(s.range.start.0, next);
        assert!(!s.range.is_empty());
        next = s.range.end.0;
    }
    assert_eq!(next, t.total_frames());
    assert_eq!(spans.iter().filter(|s| s.from.is_some()).count(), 4);

    for f in 0..t.total_frames() {
        match t.locate(FrameIndex(f)).unwrap() {
            Segment::Scene { index, local } => {
                assert!(local < t.scenes()[index].duration());
            }
            Segment::Transition {
                from,
                to,
                from_local,
                to_local,
                progress,
            } => {
                assert_eq!(to, from + 1);
                assert!(from_local < t.scenes()[from].duration());
                assert!(to_local < t.scenes()[to].duration());
                assert!((0.0..1.0).contains(&progress));
            }
        }
    }
}

#[test]
fn zero_length_transition_hard_cuts() {
    let mut cfg = ReelConfig::default();
    cfg.transition.duration_frames = 0;
    let t = Timeline::build(&cfg).unwrap();
    assert_eq!(t.segments().len(), 5);
    assert_eq!(
        t.locate(FrameIndex(120)).unwrap(),
        Segment::Scene { index: 1, local: 0 }
    );
}

#[test]
fn transition_frame_blends_both_scenes() {
    let out = timeline().render(FrameIndex(125)).unwrap();
    assert_eq!(out.root.id, "transition");
    let outgoing = out.root.find("transition.outgoing").unwrap();
    let incoming = out.root.find("transition.incoming").unwrap();
    assert_eq!(outgoing.opacity, 0.75);
    assert_eq!(incoming.opacity, 0.25);
    assert_eq!(outgoing.blur_px, 3.0);
    assert_eq!(incoming.blur_px, 9.0);
    assert_eq!(outgoing.children[0].id, "hero");
    assert_eq!(incoming.children[0].id, "features");
}

#[test]
fn thumbnail_is_declared_on_frame_zero_only() {
    let t = timeline();
    let first = t.render(FrameIndex(0)).unwrap();
    assert_eq!(
        first.artifacts,
        vec![Artifact {
            kind: ArtifactKind::Thumbnail,
            filename: "thumbnail.jpeg".to_owned()
        }]
    );
    assert!(t.render(FrameIndex(1)).unwrap().artifacts.is_empty());
    assert!(t.render(FrameIndex(629)).unwrap().artifacts.is_empty());
}

#[test]
fn build_fails_fast_on_bad_config() {
    let mut cfg = ReelConfig::default();
    cfg.durations.hero = 0;
    assert!(Timeline::build(&cfg).is_err());

    let mut cfg = ReelConfig::default();
    cfg.durations.hero = 30;
    assert!(Timeline::build(&cfg).is_err());

    let cfg = ReelConfig::from_json_str(r#"{ "durations": { "hero": 50 } }"#).unwrap();
    let err = Timeline::build(&cfg).unwrap_err();
    assert!(err.to_string().contains("hero.cta"));
}
