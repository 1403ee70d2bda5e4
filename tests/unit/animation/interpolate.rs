use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn maps_linearly_inside_range() {
    assert!(close(
        interpolate(6.0, [0.0, 12.0], [0.0, 1.0], InterpolateOpts::default()),
        0.5
    ));
    assert!(close(
        interpolate(0.25, [0.0, 1.0], [30.0, 0.0], InterpolateOpts::default()),
        22.5
    ));
}

#[test]
fn extrapolation_modes_apply_per_side() {
    let extend = InterpolateOpts::default();
    assert!(close(interpolate(-6.0, [0.0, 12.0], [0.0, 1.0], extend), -0.5));
    assert!(close(interpolate(24.0, [0.0, 12.0], [0.0, 1.0], extend), 2.0));

    let right = InterpolateOpts {
        right: Extrapolate::Clamp,
        ..InterpolateOpts::default()
    };
    assert!(close(interpolate(24.0, [0.0, 12.0], [0.0, 1.0], right), 1.0));
    assert!(close(interpolate(-6.0, [0.0, 12.0], [0.0, 1.0], right), -0.5));

    let identity = InterpolateOpts {
        left: Extrapolate::Identity,
        right: Extrapolate::Identity,
        ease: Ease::Linear,
    };
    assert!(close(interpolate(40.0, [0.0, 12.0], [0.0, 1.0], identity), 40.0));
}

#[test]
fn clamp_interpolate_flags_match_options() {
    assert_eq!(clamp_interpolate(-5.0, [0.0, 10.0], [0.0, 1.0], true, true), 0.0);
    assert_eq!(clamp_interpolate(15.0, [0.0, 10.0], [0.0, 1.0], true, true), 1.0);
    assert!(close(
        clamp_interpolate(-5.0, [0.0, 10.0], [0.0, 1.0], false, true),
        -0.5
    ));
    assert!(close(
        clamp_interpolate(15.0, [0.0, 10.0], [0.0, 1.0], true, false),
        1.5
    ));
}

#[test]
fn degenerate_and_nan_inputs_are_total() {
    let o = InterpolateOpts::default();
    assert_eq!(interpolate(4.0, [5.0, 5.0], [0.0, 1.0], o), 0.0);
    assert_eq!(interpolate(5.0, [5.0, 5.0], [0.0, 1.0], o), 1.0);
    assert_eq!(interpolate(f64::NAN, [0.0, 1.0], [3.0, 9.0], o), 3.0);
}

#[test]
fn easing_applies_inside_segment_only() {
    let eased = InterpolateOpts::CLAMP.with_ease(Ease::InQuad);
    assert!(close(interpolate(5.0, [0.0, 10.0], [0.0, 100.0], eased), 25.0));
    assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 100.0], eased), 100.0);
}

#[test]
fn piecewise_selects_segment() {
    let i = Interpolator::new(
        vec![0.0, 10.0, 20.0],
        vec![0.0, 1.0, 0.0],
        InterpolateOpts::CLAMP,
    )
    .unwrap();
    assert!(close(i.sample(5.0), 0.5));
    assert!(close(i.sample(10.0), 1.0));
    assert!(close(i.sample(15.0), 0.5));
    assert_eq!(i.sample(-1.0), 0.0);
    assert_eq!(i.sample(99.0), 0.0);
}

#[test]
fn piecewise_rejects_malformed_ranges() {
    let o = InterpolateOpts::default();
    assert!(Interpolator::new(vec![0.0], vec![0.0], o).is_err());
    assert!(Interpolator::new(vec![0.0, 1.0], vec![0.0], o).is_err());
    assert!(Interpolator::new(vec![1.0, 1.0], vec![0.0, 1.0], o).is_err());
    assert!(Interpolator::new(vec![0.0, f64::INFINITY], vec![0.0, 1.0], o).is_err());
    assert!(interpolate_piecewise(3.0, &[2.0, 1.0], &[0.0, 1.0], o).is_err());
    assert!(close(
        interpolate_piecewise(1.5, &[1.0, 2.0], &[0.0, 1.0], o).unwrap(),
        0.5
    ));
}
