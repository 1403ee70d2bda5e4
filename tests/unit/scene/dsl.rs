use super::*;
use crate::scene::model::Position;

#[test]
fn build_clamps_opacity_and_blur() {
    let n = NodeBuilder::group("g").opacity(1.7).blur(-3.0).build();
    assert_eq!(n.opacity, 1.0);
    assert_eq!(n.blur_px, 0.0);

    let n = NodeBuilder::group("g").opacity(f64::NAN).blur(f64::INFINITY).build();
    assert_eq!(n.opacity, 0.0);
    assert_eq!(n.blur_px, 0.0);
}

#[test]
fn group_only_setters_ignore_other_kinds() {
    let n = NodeBuilder::image("img", "u").flex(Flex::row()).clip().cover().rounded(12.0).build();
    match n.kind {
        NodeKind::Image(i) => {
            assert_eq!(i.fit, ImageFit::Cover);
            assert_eq!(i.corner_radius, 12.0);
        }
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn transform_setters_compose() {
    let n = NodeBuilder::group("g").translate(3.0, -4.0).scale(0.5).rotate_deg(90.0).build();
    assert_eq!(n.transform.translate, Vec2::new(3.0, -4.0));
    assert_eq!(n.transform.scale, Vec2::new(0.5, 0.5));
    assert!((n.transform.rotation_rad - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn stage_fills_parent_and_grid_defaults_to_fill() {
    let stage = NodeBuilder::stage("s", Color::rgb(0, 0, 0)).build();
    assert_eq!(stage.position, Position::Fill);
    let grid = NodeBuilder::grid(
        "grid",
        GridNode {
            cell_size: 60.0,
            line_color: Color::rgb(255, 255, 255).with_alpha(0.05),
            scroll: Vec2::ZERO,
            fade_edges: true,
        },
    )
    .build();
    assert_eq!(grid.position, Position::Fill);
}

#[test]
fn label_has_single_plain_run() {
    let t = label(font("Inter", 20.0, 400), Color::rgb(1, 2, 3), "hello");
    assert_eq!(t.runs.len(), 1);
    assert_eq!(t.runs[0].opacity, 1.0);
    assert_eq!(t.runs[0].color, Color::rgb(1, 2, 3));
}
