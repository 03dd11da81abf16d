//! Compass bearings on the circular [0, 360) domain.
//!
//! Purpose
//! - Canonicalize arbitrary real angles, compare them across the 0/360 seam,
//!   and convert between bearings and planar direction vectors.
//! - Every modulo operation goes through `normalize_bearing`; nothing else in
//!   the crate calls `rem_euclid` on degrees.
//!
//! Boundary policy for the ordering predicates
//! - `bearing_leq(a, b)`: `b` lies clockwise of `a` by more than `eps` and at
//!   most a half-turn (+`eps`).
//! - `bearing_geq(a, b)`: the mirror image, `b` lies counter-clockwise of `a`.
//! - Coincident bearings give `false` for both; opposite bearings (180°) give
//!   `true` for both. The two predicates are therefore not negations.
//!
//! Code cross-refs: `trace::{calculate_strike, calculate_dip_direction}`.

mod cfg;

pub use cfg::BearingCfg;

use nalgebra::Vector2;

/// One full turn in degrees.
pub const FULL_TURN: f64 = 360.0;
/// Half a turn in degrees.
pub const HALF_TURN: f64 = 180.0;
/// Quarter turn in degrees; strike → dip direction offset.
pub const QUARTER_TURN: f64 = 90.0;

/// Map any real angle to the equivalent bearing in [0, 360).
///
/// Non-finite input propagates as NaN.
#[inline]
pub fn normalize_bearing(b: f64) -> f64 {
    let r = b.rem_euclid(FULL_TURN);
    // Tiny negative inputs round up to exactly 360.
    if r >= FULL_TURN {
        0.0
    } else {
        r
    }
}

/// Smallest unsigned rotation separating `a` and `b`, in [0, 180].
#[inline]
pub fn smallest_difference(a: f64, b: f64) -> f64 {
    let d = (normalize_bearing(a) - normalize_bearing(b)).abs();
    if d > HALF_TURN {
        FULL_TURN - d
    } else {
        d
    }
}

/// Clockwise sweep from `from` to `to`, in [0, 360).
#[inline]
pub fn clockwise_offset(from: f64, to: f64) -> f64 {
    normalize_bearing(to - from)
}

#[inline]
fn within_half_turn(offset: f64, eps: f64) -> bool {
    offset > eps && offset <= HALF_TURN + eps
}

/// `b` lies clockwise of `a` within a half-turn (default tolerance).
pub fn bearing_leq(a: f64, b: f64) -> bool {
    bearing_leq_eps(a, b, BearingCfg::default().eps_angle)
}

/// `b` lies counter-clockwise of `a` within a half-turn (default tolerance).
pub fn bearing_geq(a: f64, b: f64) -> bool {
    bearing_geq_eps(a, b, BearingCfg::default().eps_angle)
}

/// `bearing_leq` with explicit angular slack `eps` (degrees).
#[inline]
pub fn bearing_leq_eps(a: f64, b: f64, eps: f64) -> bool {
    within_half_turn(clockwise_offset(a, b), eps)
}

/// `bearing_geq` with explicit angular slack `eps` (degrees).
#[inline]
pub fn bearing_geq_eps(a: f64, b: f64, eps: f64) -> bool {
    within_half_turn(clockwise_offset(b, a), eps)
}

/// Opposite compass direction.
#[inline]
pub fn reverse_bearing(b: f64) -> f64 {
    normalize_bearing(b + HALF_TURN)
}

/// Bearing of a planar direction vector (x east, y north).
///
/// `None` for zero-length or non-finite vectors.
pub fn bearing_of_vector(v: Vector2<f64>) -> Option<f64> {
    if !(v.x.is_finite() && v.y.is_finite()) || (v.x == 0.0 && v.y == 0.0) {
        return None;
    }
    Some(normalize_bearing(v.x.atan2(v.y).to_degrees()))
}

/// Unit direction vector (x east, y north) pointing along bearing `b`.
#[inline]
pub fn unit_vector_of_bearing(b: f64) -> Vector2<f64> {
    let (s, c) = b.to_radians().sin_cos();
    Vector2::new(s, c)
}

/// Bearing of the resultant of `vectors`, or `None` if it is no longer than `eps`.
///
/// Callers decide the weighting by what they pass in: unit vectors give the
/// plain circular mean, raw vectors weight by magnitude.
pub fn resultant_bearing<I>(vectors: I, eps: f64) -> Option<f64>
where
    I: IntoIterator<Item = Vector2<f64>>,
{
    let sum = vectors
        .into_iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, v| acc + v);
    let norm = sum.norm();
    if !norm.is_finite() || norm <= eps {
        return None;
    }
    bearing_of_vector(sum)
}

/// Circular mean of bearings (unit-vector sum, recovered with atan2).
///
/// `None` for an empty slice or when the directions cancel out.
pub fn circular_mean(bearings: &[f64]) -> Option<f64> {
    resultant_bearing(
        bearings.iter().map(|&b| unit_vector_of_bearing(b)),
        BearingCfg::default().eps_resultant,
    )
}

/// Weighted circular mean over `(bearing, weight)` pairs.
pub fn weighted_circular_mean(pairs: &[(f64, f64)]) -> Option<f64> {
    resultant_bearing(
        pairs.iter().map(|&(b, w)| unit_vector_of_bearing(b) * w),
        BearingCfg::default().eps_resultant,
    )
}

#[cfg(test)]
mod tests;
