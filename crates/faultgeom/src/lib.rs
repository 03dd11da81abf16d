//! Bearing arithmetic and dip-direction geometry for fault traces.
//!
//! Conventions
//! - Bearings are `f64` degrees, clockwise from north, canonical range [0, 360).
//! - Planar points are `Vector2<f64>` with `x` = easting and `y` = northing.
//!   Units do not matter; only directions enter the bearing computations.
//! - Everything here is pure: inputs are borrowed, outputs are fresh values.
//!
//! API Policy
//! - `api` is the curated surface for callers (CLI, Python bindings).
//! - `prelude` is the quick-import set for tests and experiments.

pub mod api;
pub mod bearing;
mod error;
pub mod trace;

pub use error::GeomError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bearing::BearingCfg;
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::bearing::{
        bearing_geq, bearing_leq, normalize_bearing, reverse_bearing, smallest_difference,
        BearingCfg,
    };
    pub use crate::trace::rand::{draw_trace, ReplayToken, TraceCfg, VertexCount};
    pub use crate::trace::{
        calculate_dip_direction, calculate_strike, reverse_line, Polyline, StrikeWeighting,
    };
    pub use crate::GeomError;
    pub use nalgebra::Vector2 as Vec2;
}
