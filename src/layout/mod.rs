//! Layout engine for lambda diagrams
//!
//! This module is organized into submodules:
//! - `types`: The immutable layout output model (boxes, applicators, pipes, ...)
//! - `measure`: Bottom-up bounding sizes
//! - `builder`: The accumulator shared by the place and route passes
//! - `place`: Top-down absolute placement, emitting ports
//! - `route`: Pipes from binders and free entries to their use sites
//! - `crossing`: Pipe-pipe intersection detection
//!
//! Passes run strictly in that order and never call back into an earlier one.

pub mod builder;
pub mod crossing;
pub mod measure;
pub mod place;
pub mod route;
pub mod types;

pub use crossing::{detect_crossings, segment_intersection};
pub use measure::measure;
pub use types::*;

use crate::ast::Expr;
use crate::style::Style;
use crate::types::{Size, pt};

use builder::{LayoutBuilder, Output};
use place::place;

/// Compute the full diagram layout for `expr`.
///
/// The expression is placed one margin (a grid unit) in from the top-left
/// corner, and the diagram is its measured size plus a margin on every side.
/// Free variables enter from `x = 0`, inside the left margin.
pub fn layout(expr: &Expr, style: &Style) -> Layout {
    let size = measure(expr, style);
    let margin = style.margin();
    crate::log::debug!(width = size.width, height = size.height, "measured expression");

    let mut builder = LayoutBuilder::new();
    let output = place(expr, pt(margin, margin), style, &mut builder);
    if let Output::Use { reference, at } = output {
        // a bare variable: nothing consumes it, so its own point is the use site
        builder.record_use(reference, at);
    }
    crate::log::debug!(
        boxes = builder.boxes.len(),
        applicators = builder.applicators.len(),
        "placed expression"
    );

    route::route(&mut builder, style);
    crate::log::debug!(
        pipes = builder.pipes.len(),
        fanouts = builder.fanouts.len(),
        free_vars = builder.free_vars.len(),
        "routed pipes"
    );

    let crossings = detect_crossings(&builder.pipes);
    builder.finish(
        Size::new(size.width + 2.0 * margin, size.height + 2.0 * margin),
        crossings,
    )
}
