//! Random bent fault traces (heading random walk + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for multi-segment traces used by
//!   benches and randomized tests. Same token, same trace.
//!
//! Model
//! - Start at `origin` with a base heading (fixed or uniform on [0, 360)).
//! - Each segment turns the heading by a uniform jitter in
//!   `[-bend_jitter_deg, bend_jitter_deg]` and advances by a uniform length in
//!   `[segment_min, segment_max]`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Polyline;
use crate::bearing::{normalize_bearing, unit_vector_of_bearing, FULL_TURN};
use crate::GeomError;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(2),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(2);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Random-walk trace configuration.
#[derive(Clone, Copy, Debug)]
pub struct TraceCfg {
    pub vertex_count: VertexCount,
    /// Initial heading in degrees; `None` draws it uniformly.
    pub heading: Option<f64>,
    /// Max turn per vertex in degrees. Clamped to [0, 180].
    pub bend_jitter_deg: f64,
    /// Segment length range (coordinate units).
    pub segment_min: f64,
    pub segment_max: f64,
    pub origin: Vector2<f64>,
}
impl Default for TraceCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 2, max: 12 },
            heading: None,
            bend_jitter_deg: 30.0,
            segment_min: 500.0,
            segment_max: 5000.0,
            origin: Vector2::new(1_600_000.0, 5_300_000.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random directed trace.
///
/// Fails only when `origin` is non-finite.
pub fn draw_trace(cfg: TraceCfg, tok: ReplayToken) -> Result<Polyline, GeomError> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let jitter = cfg.bend_jitter_deg.clamp(0.0, 180.0);
    let lo = cfg.segment_min.max(1e-6);
    let hi = cfg.segment_max.max(lo);
    let mut heading = match cfg.heading {
        Some(h) => normalize_bearing(h),
        None => rng.gen::<f64>() * FULL_TURN,
    };
    let mut p = cfg.origin;
    let mut pts = Vec::with_capacity(n);
    pts.push(p);
    for k in 1..n {
        if k > 1 {
            heading = normalize_bearing(heading + (rng.gen::<f64>() * 2.0 - 1.0) * jitter);
        }
        let len = if hi > lo { rng.gen_range(lo..hi) } else { lo };
        p += unit_vector_of_bearing(heading) * len;
        pts.push(p);
    }
    Polyline::new(pts)
}
