//! Directed fault traces: reversal, strike and dip direction.
//!
//! Purpose
//! - Hold a fault trace as a validated `Polyline` whose vertex order is the
//!   direction of traversal.
//! - Derive the representative strike (circular mean of segment bearings)
//!   and the dip direction (strike + 90°, right-hand rule).
//!
//! Degenerate geometry
//! - Zero-length segments (consecutive duplicates) are skipped when averaging.
//! - A trace with no usable segment, or whose segment directions cancel
//!   (out-and-back), reports `GeomError::Degenerate` instead of a bearing.
//!
//! Code cross-refs: `bearing::{resultant_bearing, normalize_bearing, BearingCfg}`.

mod dip;
pub mod rand;
mod types;

pub use dip::{
    calculate_dip_direction, calculate_dip_direction_with, calculate_strike,
    calculate_strike_with, chord_bearing, dip_direction_agrees, dip_direction_agrees_with,
    dip_direction_from_strike, orient_to_dip_direction, orient_to_dip_direction_with,
    reverse_line, segment_bearings,
};
pub use types::{Polyline, StrikeWeighting};
