//! Pipe-and-box diagrams for de Bruijn-indexed lambda calculus.
//!
//! An expression goes through a fixed pipeline:
//!
//! 1. [`layout::measure`] sizes every sub-expression bottom-up.
//! 2. The place pass gives each node absolute coordinates and ports.
//! 3. The route pass runs pipes from each binder's ear (or a free variable's
//!    entry on the left margin) to every use, fanning out when a variable is
//!    used more than once.
//! 4. Pipe crossings are detected so the renderer can show which strand
//!    passes behind.
//! 5. [`render::render_layout`] turns the finished [`Layout`] into SVG.
//!
//! ```
//! let svg = songmap::render("λ 0 0", &songmap::Style::default()).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

use pest_derive::Parser;

pub mod ast;
pub mod errors;
pub mod layout;
pub mod log;
pub mod parse;
pub mod render;
pub mod style;
pub mod types;

pub use ast::Expr;
pub use errors::{ParseError, RenderError, StyleError};
pub use layout::{Layout, layout};
pub use render::render_layout;
pub use style::Style;

#[derive(Parser)]
#[grammar = "lambda.pest"]
pub struct LambdaParser;

/// Lay out `expr` and render it to an SVG string.
///
/// `style` is assumed valid; see [`Style::validate`].
pub fn render_expr(expr: &Expr, style: &Style) -> Result<String, RenderError> {
    let layout = layout(expr, style);
    render_layout(&layout, style).to_xml()
}

/// Parse lambda source text and render it to SVG.
///
/// Returns the SVG string on success, or an error with diagnostics.
pub fn render(source: &str, style: &Style) -> Result<String, miette::Report> {
    style.validate()?;
    let expr = parse::parse(source)?;
    Ok(render_expr(&expr, style)?)
}
