use super::*;

#[test]
fn ambient_is_bounded() {
    for f in 0..2_000 {
        let v = ambient(f64::from(f), 0.04, 15.0, 0.3);
        assert!(v.abs() <= 15.0 + 1e-12);
    }
}

#[test]
fn ambient_is_periodic() {
    let freq = 0.035;
    let period = TAU / freq;
    for f in [0.0, 3.5, 17.0, 120.0] {
        let a = ambient(f, freq, 20.0, 1.0);
        let b = ambient(f + period, freq, 20.0, 1.0);
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn ambient_is_continuous_between_frames() {
    let freq = 0.05;
    let amp = 10.0;
    // |d/df| <= amp * freq, so one-frame steps are bounded.
    for f in 0..500 {
        let f = f64::from(f);
        let step = (ambient(f + 1.0, freq, amp, 0.0) - ambient(f, freq, amp, 0.0)).abs();
        assert!(step <= amp * freq + 1e-12);
    }
}

#[test]
fn oscillator_shapes_match_reference_formulas() {
    let orb = Oscillator::cos(0.03, 10.0);
    assert!((orb.sample(40.0) - (40.0f64 * 0.03).cos() * 10.0).abs() < 1e-9);

    let icon = Oscillator::sin(0.06, 4.0).shifted_by_frames(2.0 * 20.0);
    assert!((icon.sample(7.0) - ((7.0 + 40.0) * 0.06f64).sin() * 4.0).abs() < 1e-9);

    let bg = Oscillator::sin(0.02, 0.03).around(1.0);
    assert!((bg.sample(0.0) - 1.0).abs() < 1e-12);

    let mirrored = Oscillator::sin(0.03, 12.0).inverted();
    assert!((mirrored.sample(10.0) + Oscillator::sin(0.03, 12.0).sample(10.0)).abs() < 1e-12);
}

#[test]
fn period_frames_follows_frequency() {
    assert!((Oscillator::sin(0.04, 1.0).period_frames() - TAU / 0.04).abs() < 1e-9);
    assert!(Oscillator::sin(0.0, 1.0).period_frames().is_infinite());
}

#[test]
fn pulse_period_in_seconds() {
    assert_eq!(pulse(0.0, 3.0, 0.25, 1.0), 1.0);
    assert!((pulse(0.75, 3.0, 0.25, 1.0) - 1.25).abs() < 1e-12);
    assert_eq!(pulse(1.0, 0.0, 0.25, 1.0), 1.0);
}
