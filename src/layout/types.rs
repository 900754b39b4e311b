//! Layout output model
//!
//! Everything here is produced once per [`layout`](super::layout) call and is
//! read-only afterwards.

use crate::types::{Point, Rect};

/// Box drawn for one abstraction
#[derive(Debug, Clone, PartialEq)]
pub struct LBox {
    pub rect: Rect,
    /// Left-edge input port where the bound variable enters
    pub ear: Point,
    /// Right-edge output port where the abstraction's result leaves
    pub throat: Point,
    /// Number of abstractions enclosing this one
    pub depth: usize,
}

/// Junction drawn for one application
#[derive(Debug, Clone, PartialEq)]
pub struct LApplicator {
    pub center: Point,
    pub operator_input: Point,
    pub operand_input: Point,
    pub output: Point,
}

/// Open polyline from a source port to a destination port
#[derive(Debug, Clone, PartialEq)]
pub struct LPipe {
    pub points: Vec<Point>,
}

impl LPipe {
    pub fn new(points: Vec<Point>) -> Self {
        debug_assert!(!points.is_empty(), "pipes always have a source port");
        Self { points }
    }

    /// Straight two-point pipe.
    pub fn direct(from: Point, to: Point) -> Self {
        Self::new(vec![from, to])
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Point where one binder's signal splits to several use sites
#[derive(Debug, Clone, PartialEq)]
pub struct LFanout {
    pub source: Point,
    pub targets: Vec<Point>,
}

/// Two pipes crossing away from their endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LCrossing {
    /// Index into [`Layout::pipes`]; always less than `pipe_b`
    pub pipe_a: usize,
    /// Index into [`Layout::pipes`]
    pub pipe_b: usize,
    pub intersection: Point,
}

/// Entry point on the left margin for a free variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LFreeVar {
    pub entry: Point,
    /// Free index relative to the top level of the expression
    pub index: usize,
}

/// A fully placed, routed and annotated diagram
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub boxes: Vec<LBox>,
    pub applicators: Vec<LApplicator>,
    pub pipes: Vec<LPipe>,
    pub fanouts: Vec<LFanout>,
    pub crossings: Vec<LCrossing>,
    pub free_vars: Vec<LFreeVar>,
}

impl Layout {
    /// The diagram's bounding rectangle, anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The two pipes taking part in `crossing`.
    pub fn crossing_pipes(&self, crossing: &LCrossing) -> (&LPipe, &LPipe) {
        (&self.pipes[crossing.pipe_a], &self.pipes[crossing.pipe_b])
    }
}
