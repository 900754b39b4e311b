//! Facet-derived SVG element types
//!
//! The document is built from these types and serialized with `facet_xml`,
//! which takes care of escaping. Numeric attributes are stored already
//! formatted by [`fmt_num`], so output does not depend on how the serializer
//! prints floats.

use facet::Facet;
use facet_xml as xml;

use crate::errors::RenderError;
use crate::types::Point;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Significant figures kept when printing coordinates
const SIG_FIGS: i32 = 6;

/// Root SVG element
#[derive(Facet, Debug, Clone, PartialEq, Default)]
#[facet(rename = "svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Every element a diagram uses
#[derive(Facet, Debug, Clone, PartialEq)]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "rect")]
    Rect(Rect),
    #[facet(rename = "circle")]
    Circle(Circle),
    #[facet(rename = "path")]
    Path(Path),
    #[facet(rename = "polyline")]
    Polyline(Polyline),
    #[facet(rename = "text")]
    Text(Text),
}

/// SVG group element (`<g>`)
#[derive(Facet, Debug, Clone, PartialEq, Default)]
pub struct Group {
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG rect element (`<rect>`)
#[derive(Facet, Debug, Clone, PartialEq, Default)]
pub struct Rect {
    #[facet(xml::attribute)]
    pub x: Option<String>,
    #[facet(xml::attribute)]
    pub y: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
}

/// SVG circle element (`<circle>`)
#[derive(Facet, Debug, Clone, PartialEq, Default)]
pub struct Circle {
    #[facet(xml::attribute)]
    pub cx: Option<String>,
    #[facet(xml::attribute)]
    pub cy: Option<String>,
    #[facet(xml::attribute)]
    pub r: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
}

/// SVG path element (`<path>`)
#[derive(Facet, Debug, Clone, PartialEq, Default)]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
}

/// SVG polyline element (`<polyline>`)
#[derive(Facet, Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
}

/// SVG text element (`<text>`)
#[derive(Facet, Debug, Clone, PartialEq, Default)]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<String>,
    #[facet(xml::attribute)]
    pub y: Option<String>,
    #[facet(xml::attribute, rename = "font-size")]
    pub font_size: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}

/// Fill and stroke setters shared by shape elements
pub trait Paint: Sized {
    /// Solid fill, no outline.
    fn filled(self, color: &str) -> Self;
    /// Outline only.
    fn stroked(self, color: &str, width: f64) -> Self;
    fn dashed(self, pattern: &str) -> Self;
}

macro_rules! impl_paint {
    ($($ty:ty),*) => {
        $(
            impl Paint for $ty {
                fn filled(mut self, color: &str) -> Self {
                    self.fill = Some(color.to_string());
                    self.stroke = Some("none".to_string());
                    self
                }
                fn stroked(mut self, color: &str, width: f64) -> Self {
                    self.fill = Some("none".to_string());
                    self.stroke = Some(color.to_string());
                    self.stroke_width = Some(fmt_num(width));
                    self
                }
                fn dashed(mut self, pattern: &str) -> Self {
                    self.stroke_dasharray = Some(pattern.to_string());
                    self
                }
            }
        )*
    };
}

impl_paint!(Rect, Circle, Path, Polyline);

impl Svg {
    /// Empty document with a `0 0 width height` view box.
    pub fn new(width: f64, height: f64) -> Self {
        let (w, h) = (fmt_num(width), fmt_num(height));
        Self {
            xmlns: Some(SVG_NS.to_string()),
            view_box: Some(format!("0 0 {w} {h}")),
            width: Some(w),
            height: Some(h),
            children: Vec::new(),
        }
    }

    /// The group with the given class, if present.
    pub fn group(&self, class: &str) -> Option<&Group> {
        self.children.iter().find_map(|node| match node {
            SvgNode::G(g) if g.class.as_deref() == Some(class) => Some(g),
            _ => None,
        })
    }

    /// Serialize the document to XML text.
    pub fn to_xml(&self) -> Result<String, RenderError> {
        xml::to_string(self).map_err(|e| RenderError::Serialize {
            message: e.to_string(),
        })
    }
}

impl Group {
    pub fn new(class: &str) -> Self {
        Self {
            class: Some(class.to_string()),
            children: Vec::new(),
        }
    }
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(fmt_num(x)),
            y: Some(fmt_num(y)),
            width: Some(fmt_num(width)),
            height: Some(fmt_num(height)),
            ..Self::default()
        }
    }
}

impl Circle {
    pub fn new(center: Point, r: f64) -> Self {
        Self {
            cx: Some(fmt_num(center.x)),
            cy: Some(fmt_num(center.y)),
            r: Some(fmt_num(r)),
            ..Self::default()
        }
    }
}

impl Path {
    pub fn new(d: String) -> Self {
        Self {
            d: Some(d),
            ..Self::default()
        }
    }
}

impl Polyline {
    pub fn new(points: &[Point]) -> Self {
        Self {
            points: Some(fmt_points(points)),
            ..Self::default()
        }
    }
}

impl Text {
    pub fn new(at: Point, font_size: f64, fill: &str, content: impl Into<String>) -> Self {
        Self {
            x: Some(fmt_num(at.x)),
            y: Some(fmt_num(at.y)),
            font_size: Some(fmt_num(font_size)),
            fill: Some(fill.to_string()),
            content: content.into(),
        }
    }
}

/// `x,y x,y ...` as used by `points` attributes.
pub(crate) fn fmt_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shortest decimal form of `value` at six significant figures.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    // decimal exponent after rounding, so 99.99999 counts as 100
    let sci = format!("{:.*e}", (SIG_FIGS - 1) as usize, value);
    let exponent = sci
        .split_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .unwrap_or(0);
    let decimals = (SIG_FIGS - 1 - exponent).max(0) as usize;

    let fixed = format!("{value:.decimals$}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
