//! Route pass: pipes from binders and free-variable entries to their uses
//!
//! Runs once, after placement has recorded every use site.

use crate::style::Style;
use crate::types::{Point, pt};

use super::builder::LayoutBuilder;
use super::types::{LFanout, LFreeVar, LPipe};

/// Connect every ear and every free-variable entry to its use sites.
pub fn route(builder: &mut LayoutBuilder, style: &Style) {
    let half = style.half_grid();

    for id in 0..builder.boxes.len() {
        let ear = builder.boxes[id].ear;
        let targets = std::mem::take(&mut builder.bound_uses[id]);
        crate::log::trace!(binder = id, uses = targets.len(), "routing binder");
        if targets.is_empty() {
            // unused variable: a short stub so the ear is not left bare
            builder
                .pipes
                .push(LPipe::direct(ear, ear + pt(half, 0.0)));
        } else {
            fan_out(builder, ear, targets, half);
        }
    }

    let free_uses = std::mem::take(&mut builder.free_uses);
    for (index, targets) in free_uses {
        let Some(first) = targets.first() else {
            continue;
        };
        let entry = pt(0.0, first.y);
        crate::log::trace!(index, uses = targets.len(), "routing free variable");
        builder.free_vars.push(LFreeVar { entry, index });
        fan_out(builder, entry, targets, half);
    }
}

/// One target gets a direct pipe; several share a fan point `half` to the
/// right of `source`.
fn fan_out(builder: &mut LayoutBuilder, source: Point, targets: Vec<Point>, half: f64) {
    if let [target] = targets.as_slice() {
        builder.pipes.push(LPipe::direct(source, *target));
        return;
    }

    let fan = source + pt(half, 0.0);
    builder.pipes.push(LPipe::direct(source, fan));
    builder
        .pipes
        .extend(targets.iter().map(|&target| LPipe::direct(fan, target)));
    builder.fanouts.push(LFanout {
        source: fan,
        targets,
    });
}
