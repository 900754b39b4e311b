//! SVG rendering for finished layouts
//!
//! Groups are emitted in a fixed z-order, later groups drawing over earlier
//! ones: pipes, crossings, boxes, applicators, fan-outs, free-variable labels.
//! Crossing disks are painted in the background colour straight after the
//! pipes, which breaks the strand passing behind without touching the boxes
//! and applicators drawn on top. Empty groups are left out.

pub mod svg;

use crate::layout::Layout;
use crate::style::Style;
use crate::types::{Point, pt};

use svg::{Circle, Group, Paint, Path, Polyline, Rect, Svg, SvgNode, Text, fmt_num};

/// Dash pattern for box outlines.
pub const BOX_DASH: &str = "6,3";

/// Render a finished layout as an SVG document.
pub fn render_layout(layout: &Layout, style: &Style) -> Svg {
    let mut svg = Svg::new(layout.width, layout.height);
    let background = Rect::new(0.0, 0.0, layout.width, layout.height);
    svg.children.push(SvgNode::Rect(Rect {
        fill: Some(style.color_bg.clone()),
        ..background
    }));

    let groups = [
        render_pipes(layout, style),
        render_crossings(layout, style),
        render_boxes(layout, style),
        render_applicators(layout, style),
        render_fanouts(layout, style),
        render_free_vars(layout, style),
    ];
    svg.children.extend(
        groups
            .into_iter()
            .filter(|g| !g.children.is_empty())
            .map(SvgNode::G),
    );

    crate::log::debug!(
        width = layout.width,
        height = layout.height,
        groups = svg.children.len() - 1,
        "rendered layout"
    );
    svg
}

fn render_pipes(layout: &Layout, style: &Style) -> Group {
    let mut g = Group::new("pipes");
    for pipe in &layout.pipes {
        if pipe.points.len() < 2 {
            continue;
        }
        g.children.push(SvgNode::Polyline(
            Polyline::new(&pipe.points).stroked(&style.color_pipe, style.pipe_width),
        ));
    }
    g
}

fn render_crossings(layout: &Layout, style: &Style) -> Group {
    let mut g = Group::new("crossings");
    let r = style.pipe_width * 3.0;
    for crossing in &layout.crossings {
        g.children.push(disk(crossing.intersection, r, &style.color_bg));
    }
    g
}

fn render_boxes(layout: &Layout, style: &Style) -> Group {
    let mut g = Group::new("boxes");
    for lbox in &layout.boxes {
        let rect = &lbox.rect;
        g.children.push(SvgNode::Rect(
            Rect::new(rect.x, rect.y, rect.width, rect.height)
                .stroked(&style.color_box, style.pipe_width)
                .dashed(BOX_DASH),
        ));
        g.children.push(SvgNode::Path(
            Path::new(half_disk(lbox.ear, style.ear_radius, false)).filled(&style.color_fill),
        ));
        g.children.push(SvgNode::Path(
            Path::new(half_disk(lbox.throat, style.throat_radius, true))
                .filled(&style.color_fill),
        ));
    }
    g
}

fn render_applicators(layout: &Layout, style: &Style) -> Group {
    let mut g = Group::new("applicators");
    for app in &layout.applicators {
        g.children
            .push(disk(app.center, style.applicator_radius, &style.color_fill));
    }
    g
}

fn render_fanouts(layout: &Layout, style: &Style) -> Group {
    let mut g = Group::new("fanouts");
    for fan in &layout.fanouts {
        g.children
            .push(disk(fan.source, style.pipe_width * 1.5, &style.color_fill));
    }
    g
}

fn render_free_vars(layout: &Layout, style: &Style) -> Group {
    let mut g = Group::new("free-vars");
    for fv in &layout.free_vars {
        g.children.push(SvgNode::Text(Text::new(
            fv.entry + pt(2.0, -4.0),
            style.font_size,
            &style.color_fill,
            fv.index.to_string(),
        )));
    }
    g
}

fn disk(center: Point, r: f64, color: &str) -> SvgNode {
    SvgNode::Circle(Circle::new(center, r).filled(color))
}

/// Vertical half-disk centred on `at`.
///
/// The ear bulges out of the box to the left and the throat to the right, so
/// the pair reads as a funnel and a spout.
fn half_disk(at: Point, r: f64, bulge_right: bool) -> String {
    let sweep = if bulge_right { 1 } else { 0 };
    let x = fmt_num(at.x);
    let r_s = fmt_num(r);
    format!(
        "M {x},{} A {r_s},{r_s} 0 0 {sweep} {x},{}",
        fmt_num(at.y - r),
        fmt_num(at.y + r)
    )
}
