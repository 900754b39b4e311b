//! Crossing detection between routed pipes
//!
//! Quadratic in pipes and in segments per pipe. A diagram holds a single
//! expression, so the pipe set stays small.

use crate::types::Point;

use super::types::{LCrossing, LPipe};

/// Denominators below this are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Interior intersection of segments `a1→a2` and `b1→b2`.
///
/// Solves `a1 + t·(a2 - a1) = b1 + u·(b2 - b1)` and accepts only
/// `0 < t < 1` and `0 < u < 1`, so segments that merely share an endpoint
/// (pipes leaving the same fan point, say) do not count. Near-parallel and
/// collinear segments never intersect.
pub fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let da = a2 - a1;
    let db = b2 - b1;
    let denom = da.perp_dot(db);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let offset = b1 - a1;
    let t = offset.perp_dot(db) / denom;
    let u = offset.perp_dot(da) / denom;
    if t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0 {
        Some(a1 + da * t)
    } else {
        None
    }
}

/// Every crossing between distinct pipes, ordered by first pipe, second
/// pipe, then segment.
pub fn detect_crossings(pipes: &[LPipe]) -> Vec<LCrossing> {
    let mut crossings = Vec::new();
    for (i, pa) in pipes.iter().enumerate() {
        for (j, pb) in pipes.iter().enumerate().skip(i + 1) {
            for (a1, a2) in pa.segments() {
                for (b1, b2) in pb.segments() {
                    if let Some(intersection) = segment_intersection(a1, a2, b1, b2) {
                        crossings.push(LCrossing {
                            pipe_a: i,
                            pipe_b: j,
                            intersection,
                        });
                    }
                }
            }
        }
    }
    crate::log::debug!(pipes = pipes.len(), crossings = crossings.len(), "crossings detected");
    crossings
}
