//! Strike and dip direction of directed traces.
//!
//! Model
//! - Strike is the circular mean of the per-segment bearings: each segment
//!   contributes a direction vector, the vectors are summed, and the bearing
//!   of the resultant is recovered with atan2. Averaging degrees directly
//!   breaks across the 0/360 seam, the vector sum does not.
//! - Dip direction is strike rotated a quarter-turn clockwise, i.e. to the
//!   right of an observer walking the trace from first to last vertex.
//! - Reversing a trace negates every segment vector, so the resultant flips
//!   and the dip direction moves by exactly a half-turn.

use nalgebra::Vector2;
use tracing::{debug, trace};

use super::types::{Polyline, StrikeWeighting};
use crate::bearing::{
    bearing_of_vector, normalize_bearing, resultant_bearing, smallest_difference, BearingCfg,
    QUARTER_TURN,
};
use crate::GeomError;

/// Reversed copy of `line`; the input is untouched.
pub fn reverse_line(line: &Polyline) -> Polyline {
    line.reversed()
}

/// Non-degenerate segment vectors of `line` (length > `eps_length`).
fn directed_segments<'a>(
    line: &'a Polyline,
    cfg: &'a BearingCfg,
) -> impl Iterator<Item = Vector2<f64>> + 'a {
    line.segments().enumerate().filter_map(move |(i, d)| {
        if d.norm() > cfg.eps_length {
            Some(d)
        } else {
            trace!(segment = i, "skipping zero-length segment");
            None
        }
    })
}

/// Bearings of the non-degenerate segments, in traversal order.
pub fn segment_bearings(line: &Polyline, cfg: &BearingCfg) -> Vec<f64> {
    directed_segments(line, cfg)
        .filter_map(bearing_of_vector)
        .collect()
}

/// Bearing from the first to the last vertex.
pub fn chord_bearing(line: &Polyline) -> Result<f64, GeomError> {
    bearing_of_vector(line.last() - line.first())
        .ok_or(GeomError::Degenerate("first and last vertices coincide"))
}

/// Mean strike with default tolerances and per-segment weighting.
pub fn calculate_strike(line: &Polyline) -> Result<f64, GeomError> {
    calculate_strike_with(line, StrikeWeighting::default(), &BearingCfg::default())
}

/// Mean strike of `line` under the given weighting and tolerances.
pub fn calculate_strike_with(
    line: &Polyline,
    weighting: StrikeWeighting,
    cfg: &BearingCfg,
) -> Result<f64, GeomError> {
    let segments: Vec<Vector2<f64>> = directed_segments(line, cfg).collect();
    if segments.is_empty() {
        return Err(GeomError::Degenerate("all segments have zero length"));
    }
    // Cancellation threshold scales with total weight; unitless.
    let (resultant, eps) = match weighting {
        StrikeWeighting::PerSegment => {
            let eps = cfg.eps_resultant * segments.len() as f64;
            (
                resultant_bearing(segments.iter().map(|d| d / d.norm()), eps),
                eps,
            )
        }
        StrikeWeighting::ByLength => {
            let eps = cfg.eps_resultant * segments.iter().map(|d| d.norm()).sum::<f64>();
            (resultant_bearing(segments.iter().copied(), eps), eps)
        }
    };
    let strike = resultant.ok_or(GeomError::Degenerate("segment directions cancel out"))?;
    debug!(strike, eps, vertices = line.len(), ?weighting, "mean strike");
    Ok(strike)
}

/// Dip direction of `line`: mean strike rotated 90° clockwise.
pub fn calculate_dip_direction(line: &Polyline) -> Result<f64, GeomError> {
    calculate_dip_direction_with(line, StrikeWeighting::default(), &BearingCfg::default())
}

/// `calculate_dip_direction` with explicit weighting and tolerances.
pub fn calculate_dip_direction_with(
    line: &Polyline,
    weighting: StrikeWeighting,
    cfg: &BearingCfg,
) -> Result<f64, GeomError> {
    calculate_strike_with(line, weighting, cfg).map(dip_direction_from_strike)
}

/// Strike rotated a quarter-turn clockwise.
#[inline]
pub fn dip_direction_from_strike(strike: f64) -> f64 {
    normalize_bearing(strike + QUARTER_TURN)
}

/// True if the computed dip direction is within a quarter-turn of `expected_dip`.
///
/// Exactly perpendicular counts as agreeing.
pub fn dip_direction_agrees(line: &Polyline, expected_dip: f64) -> Result<bool, GeomError> {
    dip_direction_agrees_with(
        line,
        expected_dip,
        StrikeWeighting::default(),
        &BearingCfg::default(),
    )
}

/// `dip_direction_agrees` with explicit weighting and tolerances.
pub fn dip_direction_agrees_with(
    line: &Polyline,
    expected_dip: f64,
    weighting: StrikeWeighting,
    cfg: &BearingCfg,
) -> Result<bool, GeomError> {
    let dip = calculate_dip_direction_with(line, weighting, cfg)?;
    Ok(smallest_difference(dip, expected_dip) <= QUARTER_TURN)
}

/// `line` ordered so that its dip direction agrees with `expected_dip`.
///
/// Returns a copy of `line` when it already agrees, its reversal otherwise.
pub fn orient_to_dip_direction(
    line: &Polyline,
    expected_dip: f64,
) -> Result<Polyline, GeomError> {
    orient_to_dip_direction_with(
        line,
        expected_dip,
        StrikeWeighting::default(),
        &BearingCfg::default(),
    )
}

/// `orient_to_dip_direction` with explicit weighting and tolerances.
pub fn orient_to_dip_direction_with(
    line: &Polyline,
    expected_dip: f64,
    weighting: StrikeWeighting,
    cfg: &BearingCfg,
) -> Result<Polyline, GeomError> {
    if dip_direction_agrees_with(line, expected_dip, weighting, cfg)? {
        Ok(line.clone())
    } else {
        debug!(expected_dip, "reversing trace to match dip direction");
        Ok(reverse_line(line))
    }
}
