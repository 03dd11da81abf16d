//! Curated API for callers (CLI, Python bindings, downstream fault models).
//!
//! Prefer these re-exports over reaching into submodules; the module layout
//! behind them may move.

// Bearing arithmetic
pub use crate::bearing::{
    bearing_geq, bearing_geq_eps, bearing_leq, bearing_leq_eps, bearing_of_vector,
    circular_mean, clockwise_offset, normalize_bearing, resultant_bearing, reverse_bearing,
    smallest_difference, unit_vector_of_bearing, weighted_circular_mean, BearingCfg,
};
// Fault traces
pub use crate::trace::{
    calculate_dip_direction, calculate_dip_direction_with, calculate_strike,
    calculate_strike_with, chord_bearing, dip_direction_agrees, dip_direction_agrees_with,
    dip_direction_from_strike, orient_to_dip_direction, orient_to_dip_direction_with,
    reverse_line, segment_bearings, Polyline, StrikeWeighting,
};
// Random traces
pub use crate::trace::rand::{
    draw_trace, ReplayToken as TraceReplay, TraceCfg, VertexCount as TraceVertexCount,
};
pub use crate::GeomError;

/// Dip direction of a trace given as `[x, y]` pairs.
///
/// Convenience for callers holding raw coordinate arrays.
pub fn dip_direction_of_xy(points: &[[f64; 2]]) -> Result<f64, GeomError> {
    calculate_dip_direction(&Polyline::from_xy(points)?)
}
