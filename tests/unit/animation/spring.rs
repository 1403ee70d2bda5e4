use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn zero_before_and_at_start() {
    let cfg = SpringConfig::new(12.0, 100.0);
    assert_eq!(spring(-10.0, 0.0, fps30(), cfg), 0.0);
    assert_eq!(spring(55.0, 55.0, fps30(), cfg), 0.0);
    assert_eq!(spring(30.0, 55.0, fps30(), cfg), 0.0);
    assert_eq!(spring(f64::NAN, 0.0, fps30(), cfg), 0.0);
    assert!(spring(56.0, 55.0, fps30(), cfg) > 0.0);
}

#[test]
fn converges_to_one_for_every_regime() {
    for cfg in [
        SpringConfig::new(12.0, 100.0), // underdamped
        SpringConfig::new(20.0, 100.0), // critical
        SpringConfig::new(60.0, 100.0), // overdamped
    ] {
        let p = spring(600.0, 0.0, fps30(), cfg);
        assert!((p - 1.0).abs() < 1e-4, "{cfg:?} -> {p}");
    }
}

#[test]
fn underdamped_overshoots_unless_clamped() {
    let cfg = SpringConfig::new(5.0, 100.0);
    let peak = (0..90)
        .map(|f| spring(f64::from(f), 0.0, fps30(), cfg))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);

    let clamped = SpringConfig {
        overshoot_clamping: true,
        ..cfg
    };
    for f in 0..90 {
        assert!(spring(f64::from(f), 0.0, fps30(), clamped) <= 1.0);
    }
}

#[test]
fn non_oscillating_regimes_are_monotonic() {
    for cfg in [SpringConfig::new(20.0, 100.0), SpringConfig::new(60.0, 100.0)] {
        let mut prev = 0.0;
        for f in 0..300 {
            let p = spring(f64::from(f), 0.0, fps30(), cfg);
            assert!(p + 1e-12 >= prev, "{cfg:?} frame {f}");
            assert!(p <= 1.0 + 1e-12);
            prev = p;
        }
    }
}

#[test]
fn heavy_overdamping_does_not_overflow() {
    let cfg = SpringConfig::new(5000.0, 100.0);
    let p = spring(100_000.0, 0.0, fps30(), cfg);
    assert!(p.is_finite());
    assert!((0.0..=1.0).contains(&p));
}

#[test]
fn spring_between_maps_range() {
    let cfg = SpringConfig::new(14.0, 120.0);
    assert_eq!(spring_between(0.0, 0.0, fps30(), cfg, 30.0, 0.0), 30.0);
    let settled = spring_between(900.0, 0.0, fps30(), cfg, 30.0, 0.0);
    assert!(settled.abs() < 1e-3);
}

#[test]
fn invalid_constants_are_rejected_but_sampling_stays_total() {
    assert!(SpringConfig::new(0.0, 100.0).validate().is_err());
    assert!(SpringConfig::new(10.0, -1.0).validate().is_err());
    assert!(
        SpringConfig {
            mass: 0.0,
            ..SpringConfig::default()
        }
        .validate()
        .is_err()
    );
    let bad = SpringConfig::new(10.0, f64::NAN);
    assert_eq!(spring(-1.0, 0.0, fps30(), bad), 0.0);
    assert_eq!(spring(1.0, 0.0, fps30(), bad), 1.0);
}

#[test]
fn measure_spring_is_bounded_and_settled_afterwards() {
    for (damping, stiffness) in [(1.0, 100.0), (12.0, 100.0), (15.0, 80.0), (200.0, 100.0)] {
        let cfg = SpringConfig::new(damping, stiffness);
        let frames = measure_spring(fps30(), cfg, 0.005).unwrap();
        assert!(frames > 0);
        assert!(frames < 2_000, "{cfg:?} took {frames}");
        for f in frames..frames + 60 {
            let p = spring(f as f64, 0.0, fps30(), cfg);
            assert!((1.0 - p).abs() < 0.005, "{cfg:?} frame {f} -> {p}");
        }
    }
}

#[test]
fn measure_spring_rejects_bad_threshold() {
    assert!(measure_spring(fps30(), SpringConfig::default(), 0.0).is_err());
    assert!(measure_spring(fps30(), SpringConfig::new(0.0, 1.0), 0.01).is_err());
}
