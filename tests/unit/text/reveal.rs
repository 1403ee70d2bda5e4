use super::*;
use crate::{effects::shimmer::Shimmer, text::units::Span};

const FPS: Fps = Fps { num: 30, den: 1 };
const WHITE: Color = Color::rgb(255, 255, 255);

fn words() -> TextReveal {
    TextReveal::new(
        "features.headline",
        "Everything you need to go viral",
        SplitBy::Words,
        RevealKind::fade(0.5, Ease::OutCubic),
    )
    .start_from(12.0)
    .stagger(0.08)
}

fn all_kinds() -> Vec<RevealKind> {
    vec![
        RevealKind::fade(0.6, Ease::OutBack(1.4)),
        RevealKind::blur(0.7),
        RevealKind::slide(SlideFrom::Bottom, 40.0),
        RevealKind::wave(25.0),
        RevealKind::bounce(),
        RevealKind::scramble(1.2, "abcdefghijklmnopqrstuvwxyz./", Color::rgb(74, 222, 128)),
    ]
}

#[test]
fn unit_starts_are_fractional_and_increasing() {
    let r = words();
    assert!((r.unit_start(3, FPS) - 19.2).abs() < 1e-9);
    for i in 1..r.units().len() {
        assert!(r.unit_start(i - 1, FPS) < r.unit_start(i, FPS));
    }
    let flat = words().stagger(0.0);
    for i in 0..flat.units().len() {
        assert_eq!(flat.unit_start(i, FPS), 12.0);
    }
}

#[test]
fn word_three_first_visible_at_frame_twenty() {
    let r = words();
    assert_eq!(r.units()[3].text, "to ");
    assert_eq!(r.unit_state(3, 19.0, FPS).opacity, 0.0);
    assert!(r.unit_state(3, 20.0, FPS).opacity > 0.0);
}

#[test]
fn every_kind_is_invisible_before_start() {
    for kind in all_kinds() {
        let r = TextReveal::new("t", "Hello there", SplitBy::Chars, kind).start_from(10.0);
        for i in 0..r.units().len() {
            for frame in [0.0, 5.0, 9.999] {
                let s = r.unit_state(i, frame, FPS);
                assert_eq!(s.opacity, 0.0, "{:?} unit {i} frame {frame}", r.kind());
            }
        }
    }
}

#[test]
fn every_kind_settles() {
    for kind in all_kinds() {
        let r = TextReveal::new("t", "Hello there", SplitBy::Chars, kind)
            .start_from(0.0)
            .stagger(0.02);
        let late = 600.0;
        for i in 0..r.units().len() {
            let s = r.unit_state(i, late, FPS);
            assert!((s.opacity - 1.0).abs() < 1e-9);
            assert!(s.offset.hypot() < 1e-3, "{:?} unit {i}", r.kind());
            assert!(s.blur_px.abs() < 1e-9);
            assert!(s.glyph.is_none());
        }
    }
}

#[test]
fn not_begun_units_carry_full_offset_and_blur() {
    let slide = TextReveal::new("s", "Why", SplitBy::Chars, RevealKind::slide(SlideFrom::Bottom, 40.0))
        .start_from(5.0);
    assert_eq!(slide.unit_state(0, 0.0, FPS).offset, Vec2::new(0.0, 40.0));

    let blur = TextReveal::new("b", "No editing", SplitBy::Words, RevealKind::blur(0.7)).start_from(32.0);
    assert_eq!(blur.unit_state(1, 0.0, FPS).blur_px, 10.0);
}

#[test]
fn scramble_is_deterministic_and_resolves() {
    let r = TextReveal::new(
        "closing.url",
        "revid.ai",
        SplitBy::Chars,
        RevealKind::scramble(1.2, "abcdefghijklmnopqrstuvwxyz./", Color::rgb(74, 222, 128)),
    )
    .start_from(58.0)
    .stagger(0.03);

    let a = r.runs(70.0, FPS, WHITE);
    let b = r.runs(70.0, FPS, WHITE);
    assert_eq!(a, b);
    assert!(a.iter().all(|run| run.text.chars().count() == 1));
    assert!(a.iter().all(|run| "abcdefghijklmnopqrstuvwxyz./".contains(run.text.as_str())));
    assert_eq!(a[0].color, Color::rgb(74, 222, 128));

    let done: String = r.runs(200.0, FPS, WHITE).iter().map(|run| run.text.as_str()).collect();
    assert_eq!(done, "revid.ai");
}

#[test]
fn runs_take_span_color_and_shimmer() {
    let green = Color::rgb(74, 222, 128);
    let text = RichText::default()
        .span(Span::plain("Start creating "))
        .span(Span::shimmering("viral content", Shimmer::new(green, WHITE, 2.5)))
        .span(Span::plain(" today"));
    let r = TextReveal::new("h", text, SplitBy::Chars, RevealKind::fade(0.6, Ease::OutBack(1.4)));
    let runs = r.runs(300.0, FPS, WHITE);
    assert_eq!(runs[0].color, WHITE);
    assert!(runs[0].highlight.is_none());
    let v = runs.iter().position(|run| run.text == "v").unwrap();
    assert_eq!(runs[v].color, green);
    assert!(runs[v].highlight.is_some());
}

#[test]
fn validate_catches_late_units_and_bad_params() {
    assert!(words().validate(FPS, 120).is_ok());
    // Last of 6 words starts at 12 + 5 * 2.4 = 24.
    assert!(words().validate(FPS, 24).is_err());
    assert!(words().stagger(-0.1).validate(FPS, 120).is_err());
    assert!(words().start_from(f64::NAN).validate(FPS, 120).is_err());
    let bad = TextReveal::new("x", "a", SplitBy::Chars, RevealKind::fade(0.0, Ease::Linear));
    assert!(bad.validate(FPS, 120).is_err());
    let bad = TextReveal::new("x", "a", SplitBy::Chars, RevealKind::scramble(1.0, "", WHITE));
    assert!(bad.validate(FPS, 120).is_err());
}

#[test]
fn out_of_range_unit_is_hidden() {
    assert_eq!(words().unit_state(99, 100.0, FPS), UnitState::HIDDEN);
    assert!(words().last_unit_start(FPS).is_some());
    let empty = TextReveal::new("e", "", SplitBy::Words, RevealKind::blur(0.5));
    assert!(empty.last_unit_start(FPS).is_none());
}
