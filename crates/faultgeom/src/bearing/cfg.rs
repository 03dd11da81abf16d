//! Tolerance defaults for bearing and trace computations.
//!
//! Policy
//! - Defaults are fixed so call sites stay free of tolerance juggling; the
//!   `_eps`/`_with` variants take an explicit value when a caller needs one.

/// Tolerances shared by the ordering predicates and the strike averaging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BearingCfg {
    /// Angular slack in degrees: offsets at or below this count as coincident.
    pub eps_angle: f64,
    /// Segments at or below this length (coordinate units) carry no direction.
    pub eps_length: f64,
    /// Unitless cancellation threshold: a resultant at or below this fraction
    /// of its unit-vector count (or of the trace length) has no mean direction.
    pub eps_resultant: f64,
}

impl Default for BearingCfg {
    fn default() -> Self {
        Self {
            eps_angle: 1e-9,
            eps_length: 1e-9,
            eps_resultant: 1e-9,
        }
    }
}
