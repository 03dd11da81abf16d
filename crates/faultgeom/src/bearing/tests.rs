use super::*;
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn smallest_difference_literal_cases() {
    assert!(close(smallest_difference(5.0, 355.0), 10.0));
    assert!(close(smallest_difference(-4.0, 355.0), 1.0));
    assert!(close(smallest_difference(46.0, 225.0), 179.0));
    assert!(close(smallest_difference(44.0, 225.0), 179.0));
}

#[test]
fn normalize_literal_cases() {
    assert!(close(normalize_bearing(-45.0), 315.0));
    assert!(close(normalize_bearing(693.0), 333.0));
    assert_eq!(normalize_bearing(360.0), 0.0);
    assert_eq!(normalize_bearing(-360.0), 0.0);
    // rem_euclid rounds this up to 360 without the fold
    let r = normalize_bearing(-1e-14);
    assert!((0.0..FULL_TURN).contains(&r));
}

#[test]
fn normalize_non_finite_is_nan() {
    assert!(normalize_bearing(f64::NAN).is_nan());
    assert!(normalize_bearing(f64::INFINITY).is_nan());
}

#[test]
fn leq_geq_literal_cases() {
    assert!(bearing_leq(271.0, 90.0));
    assert!(!bearing_leq(269.0, 90.0));
    assert!(!bearing_geq(140.0, 315.0));
    assert!(bearing_geq(90.0, 315.0));
}

#[test]
fn leq_geq_boundaries() {
    // coincident: neither side
    assert!(!bearing_leq(90.0, 90.0));
    assert!(!bearing_geq(90.0, 90.0));
    assert!(!bearing_leq(0.0, 360.0));
    assert!(!bearing_geq(-720.0, 0.0));
    // opposite: both sides
    assert!(bearing_leq(10.0, 190.0));
    assert!(bearing_geq(10.0, 190.0));
    assert!(bearing_leq(350.0, 170.0));
    assert!(bearing_geq(350.0, 170.0));
    // just past the half-turn flips leq off, geq stays on
    assert!(!bearing_leq(10.0, 190.5));
    assert!(bearing_geq(10.0, 190.5));
}

#[test]
fn leq_geq_explicit_tolerance() {
    assert!(!bearing_leq_eps(10.0, 10.05, 0.1));
    assert!(bearing_leq_eps(10.0, 10.05, 0.01));
    assert!(bearing_geq_eps(0.0, 359.95, 0.01));
    assert!(!bearing_geq_eps(0.0, 359.95, 0.1));
}

#[test]
fn reverse_bearing_literal() {
    assert!(close(reverse_bearing(0.1), 180.1));
    assert!(close(reverse_bearing(270.0), 90.0));
    assert!(close(reverse_bearing(-90.0), 90.0));
}

#[test]
fn vector_bearing_conversions() {
    assert!(close(bearing_of_vector(vector![0.0, 1.0]).unwrap(), 0.0));
    assert!(close(bearing_of_vector(vector![1.0, 0.0]).unwrap(), 90.0));
    assert!(close(bearing_of_vector(vector![0.0, -2.0]).unwrap(), 180.0));
    assert!(close(bearing_of_vector(vector![-3.0, 0.0]).unwrap(), 270.0));
    assert!(close(bearing_of_vector(vector![1.0, 1.0]).unwrap(), 45.0));
    assert!(bearing_of_vector(vector![0.0, 0.0]).is_none());
    assert!(bearing_of_vector(vector![f64::NAN, 1.0]).is_none());

    let u = unit_vector_of_bearing(135.0);
    assert!((u.norm() - 1.0).abs() < 1e-12);
    assert!(close(bearing_of_vector(u).unwrap(), 135.0));
}

#[test]
fn circular_mean_across_north() {
    let m = circular_mean(&[45.0, 315.0]).unwrap();
    assert!(smallest_difference(m, 0.0) < 1e-9);
    let m = circular_mean(&[350.0, 20.0]).unwrap();
    assert!(smallest_difference(m, 5.0) < 1e-9);
    assert!(circular_mean(&[]).is_none());
    assert!(circular_mean(&[10.0, 190.0]).is_none());
}

#[test]
fn weighted_mean_leans_to_heavier_side() {
    let m = weighted_circular_mean(&[(0.0, 3.0), (90.0, 1.0)]).unwrap();
    assert!(m > 0.0 && m < 45.0);
    let even = weighted_circular_mean(&[(0.0, 1.0), (90.0, 1.0)]).unwrap();
    assert!(close(even, 45.0));
}

#[test]
fn randomized_seeded_reverse_is_half_turn_away() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..256 {
        let b: f64 = rng.gen_range(-1000.0..1000.0);
        let r = reverse_bearing(b);
        assert!((smallest_difference(b, r) - HALF_TURN).abs() < 1e-9);
        assert!(close(smallest_difference(reverse_bearing(r), b), 0.0));
    }
}

proptest! {
    #[test]
    fn normalize_in_range_and_idempotent(x in -1.0e6f64..1.0e6) {
        let n = normalize_bearing(x);
        prop_assert!((0.0..FULL_TURN).contains(&n));
        prop_assert_eq!(normalize_bearing(n), n);
        // congruent mod 360
        let k = ((x - n) / FULL_TURN).round();
        prop_assert!((x - n - k * FULL_TURN).abs() < 1e-6);
    }

    #[test]
    fn smallest_difference_symmetric_and_bounded(a in -1.0e4f64..1.0e4, b in -1.0e4f64..1.0e4) {
        let d = smallest_difference(a, b);
        prop_assert_eq!(d, smallest_difference(b, a));
        prop_assert!((0.0..=HALF_TURN).contains(&d));
    }

    #[test]
    fn leq_mirrors_geq(a in -1.0e3f64..1.0e3, b in -1.0e3f64..1.0e3) {
        prop_assert_eq!(bearing_leq(a, b), bearing_geq(b, a));
    }

    #[test]
    fn exactly_one_side_away_from_boundaries(a in 0.0f64..360.0, off in 1e-3f64..179.999) {
        let cw = a + off;
        prop_assert!(bearing_leq(a, cw));
        prop_assert!(!bearing_geq(a, cw));
        let ccw = a - off;
        prop_assert!(bearing_geq(a, ccw));
        prop_assert!(!bearing_leq(a, ccw));
    }
}
