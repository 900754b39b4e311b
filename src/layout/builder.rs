//! Layout builder - accumulates geometry during the place and route passes

use std::collections::BTreeMap;

use crate::types::{Point, Size};

use super::types::*;

/// What a variable leaf refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// Bound by the box at this index in `LayoutBuilder::boxes`
    Bound(usize),
    /// Free, with the index counted from the top level
    Free(usize),
}

/// The single thing a placed sub-expression hands to its parent
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Output {
    /// A concrete output port (throat or applicator output)
    Port(Point),
    /// A variable leaf. It has no port of its own: whichever port consumes it
    /// becomes a use site of `reference`. `at` is the leaf's connection point.
    Use { reference: Reference, at: Point },
}

/// Mutable state for one layout call
///
/// Created empty, filled by `place` and `route`, then consumed by
/// [`LayoutBuilder::finish`]. Never shared between layout calls.
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    pub boxes: Vec<LBox>,
    pub applicators: Vec<LApplicator>,
    pub pipes: Vec<LPipe>,
    pub fanouts: Vec<LFanout>,
    pub free_vars: Vec<LFreeVar>,
    /// Use sites per binder, indexed like `boxes`
    pub bound_uses: Vec<Vec<Point>>,
    /// Use sites per free index
    pub free_uses: BTreeMap<usize, Vec<Point>>,
    /// Boxes enclosing the node being placed, outermost first
    binders: Vec<usize>,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of abstractions enclosing the node being placed.
    pub fn depth(&self) -> usize {
        self.binders.len()
    }

    /// Record a box and make it the innermost binder until [`Self::close_box`].
    pub fn open_box(&mut self, lbox: LBox) -> usize {
        let id = self.boxes.len();
        self.boxes.push(lbox);
        self.bound_uses.push(Vec::new());
        self.binders.push(id);
        id
    }

    pub fn close_box(&mut self) {
        self.binders.pop();
    }

    /// Resolve a de Bruijn index against the enclosing binders.
    pub fn resolve(&self, index: usize) -> Reference {
        let depth = self.depth();
        if index < depth {
            Reference::Bound(self.binders[depth - 1 - index])
        } else {
            Reference::Free(index - depth)
        }
    }

    pub fn add_applicator(&mut self, applicator: LApplicator) {
        self.applicators.push(applicator);
    }

    /// Wire a child's output into `port`.
    ///
    /// Ports are joined with a direct pipe. Variable uses are deferred to the
    /// route pass, which draws them from the binder (or free entry) instead.
    pub fn connect(&mut self, output: Output, port: Point) {
        match output {
            Output::Port(from) => self.pipes.push(LPipe::direct(from, port)),
            Output::Use { reference, .. } => self.record_use(reference, port),
        }
    }

    pub fn record_use(&mut self, reference: Reference, site: Point) {
        match reference {
            Reference::Bound(id) => self.bound_uses[id].push(site),
            Reference::Free(index) => self.free_uses.entry(index).or_default().push(site),
        }
    }

    /// Freeze the accumulated geometry into a [`Layout`].
    pub fn finish(self, size: Size, crossings: Vec<LCrossing>) -> Layout {
        Layout {
            width: size.width,
            height: size.height,
            boxes: self.boxes,
            applicators: self.applicators,
            pipes: self.pipes,
            fanouts: self.fanouts,
            crossings,
            free_vars: self.free_vars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rect, pt};

    fn dummy_box(depth: usize) -> LBox {
        LBox {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            ear: pt(0.0, 5.0),
            throat: pt(10.0, 5.0),
            depth,
        }
    }

    #[test]
    fn resolves_against_binder_chain() {
        let mut b = LayoutBuilder::new();
        let outer = b.open_box(dummy_box(0));
        let inner = b.open_box(dummy_box(1));
        assert_eq!(b.resolve(0), Reference::Bound(inner));
        assert_eq!(b.resolve(1), Reference::Bound(outer));
        assert_eq!(b.resolve(2), Reference::Free(0));
        assert_eq!(b.resolve(5), Reference::Free(3));
    }

    #[test]
    fn sibling_boxes_are_distinct_binders() {
        let mut b = LayoutBuilder::new();
        let first = b.open_box(dummy_box(0));
        b.close_box();
        let second = b.open_box(dummy_box(0));
        assert_ne!(first, second);
        assert_eq!(b.resolve(0), Reference::Bound(second));
    }

    #[test]
    fn connect_port_emits_pipe() {
        let mut b = LayoutBuilder::new();
        b.connect(Output::Port(pt(1.0, 2.0)), pt(3.0, 4.0));
        assert_eq!(b.pipes, vec![LPipe::direct(pt(1.0, 2.0), pt(3.0, 4.0))]);
    }

    #[test]
    fn connect_use_records_site() {
        let mut b = LayoutBuilder::new();
        let id = b.open_box(dummy_box(0));
        b.connect(
            Output::Use {
                reference: Reference::Bound(id),
                at: pt(0.0, 0.0),
            },
            pt(7.0, 8.0),
        );
        b.connect(
            Output::Use {
                reference: Reference::Free(2),
                at: pt(0.0, 0.0),
            },
            pt(9.0, 9.0),
        );
        assert!(b.pipes.is_empty());
        assert_eq!(b.bound_uses[id], vec![pt(7.0, 8.0)]);
        assert_eq!(b.free_uses[&2], vec![pt(9.0, 9.0)]);
    }
}
