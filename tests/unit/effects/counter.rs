use super::*;

#[test]
fn abbreviates_reference_values() {
    assert_eq!(format_count(10_000_000.0, true), "10M");
    assert_eq!(format_count(50_000.0, true), "50K");
    assert_eq!(format_count(1_500.0, true), "1.5K");
    assert_eq!(format_count(150.0, true), "150");
    assert_eq!(format_count(12_345.0, true), "12.3K");
    assert_eq!(format_count(2_500_000_000.0, true), "2.5B");
}

#[test]
fn rounding_promotes_to_next_unit() {
    assert_eq!(format_count(999_960.0, true), "1M");
}

#[test]
fn unabbreviated_groups_thousands() {
    assert_eq!(format_count(10_000_000.0, false), "10,000,000");
    assert_eq!(format_count(999.4, false), "999");
    assert_eq!(format_count(-1_234.0, false), "-1,234");
    assert_eq!(format_count(f64::NAN, false), "0");
}

#[test]
fn counter_waits_for_delay_then_counts() {
    let c = Counter::new(0.0, 50_000.0, 1.8)
        .delay(28.0 / 30.0 + 0.2)
        .ease(Ease::Smooth)
        .abbreviated()
        .suffix("+");
    assert_eq!(c.text_at(0.0), "0+");
    assert_eq!(c.text_at(1.0), "0+");
    assert_eq!(c.text_at(10.0), "50K+");
    let mid = c.value_at(c.delay_s + 0.9);
    assert!((mid - 25_000.0).abs() < 1e-6);
}

#[test]
fn zero_duration_jumps_to_target() {
    let c = Counter::new(0.0, 150.0, 0.0);
    assert_eq!(c.value_at(0.0), 0.0);
    assert_eq!(c.value_at(0.01), 150.0);
}
