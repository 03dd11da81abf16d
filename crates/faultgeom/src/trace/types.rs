//! Directed fault traces.
//!
//! - `Polyline`: validated, immutable vertex sequence (≥ 2 finite points).
//! - `StrikeWeighting`: how segments contribute to the mean strike.

use nalgebra::Vector2;

use crate::GeomError;

/// Ordered 2D vertex sequence describing a fault trace from start to end.
///
/// Vertex order is the direction of traversal. Consecutive duplicates are
/// allowed; they simply carry no direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    vertices: Vec<Vector2<f64>>,
}

impl Polyline {
    /// Validate and wrap `vertices`.
    pub fn new(vertices: Vec<Vector2<f64>>) -> Result<Self, GeomError> {
        if vertices.len() < 2 {
            return Err(GeomError::TooFewVertices {
                got: vertices.len(),
            });
        }
        if let Some(index) = vertices
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeomError::NonFinite { index });
        }
        Ok(Self { vertices })
    }

    /// Build from `[x, y]` pairs.
    pub fn from_xy(points: &[[f64; 2]]) -> Result<Self, GeomError> {
        Self::new(points.iter().map(|p| Vector2::new(p[0], p[1])).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Vector2<f64> {
        self.vertices[0]
    }

    #[inline]
    pub fn last(&self) -> Vector2<f64> {
        self.vertices[self.vertices.len() - 1]
    }

    /// True for a single-segment trace.
    #[inline]
    pub fn is_straight(&self) -> bool {
        self.vertices.len() == 2
    }

    /// Segment vectors `p[i+1] - p[i]`, in traversal order.
    pub fn segments(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.vertices.windows(2).map(|w| w[1] - w[0])
    }

    /// Total planar length.
    pub fn length(&self) -> f64 {
        self.segments().map(|d| d.norm()).sum()
    }

    /// Copy with the vertex order reversed.
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
        }
    }

    /// Vertices as `[x, y]` pairs.
    pub fn to_xy(&self) -> Vec<[f64; 2]> {
        self.vertices.iter().map(|p| [p.x, p.y]).collect()
    }
}

/// Segment contribution to the mean strike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrikeWeighting {
    /// Each non-degenerate segment contributes a unit vector (plain circular mean).
    #[default]
    PerSegment,
    /// Each segment contributes its full vector, so long segments dominate.
    ByLength,
}
