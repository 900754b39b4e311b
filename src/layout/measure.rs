//! Measure pass: bounding sizes, bottom-up
//!
//! Sizes depend only on the expression and the style, never on position, so
//! the place pass re-measures children freely.

use crate::ast::Expr;
use crate::style::Style;
use crate::types::Size;

/// Bounding size of `expr` laid out with `style`.
///
/// - A variable is a connection point only: zero width, one grid row.
/// - An abstraction adds a port column and padding on each side, plus an ear
///   row above the body when the body is taller than one row.
/// - An application stacks operator above operand and adds one column on the
///   right for the applicator.
pub fn measure(expr: &Expr, style: &Style) -> Size {
    let g = style.grid;
    let pad = style.box_padding;
    match expr {
        Expr::Var(_) => Size::new(0.0, g),
        Expr::Func(body) => {
            let body = measure(body, style);
            let ear_row = ear_row(body, style);
            Size::new(
                g + pad + body.width + pad + g,
                pad + ear_row + body.height + pad,
            )
        }
        Expr::Appl(func, arg) => {
            let f = measure(func, style);
            let a = measure(arg, style);
            Size::new(f.width.max(a.width) + g, f.height + a.height)
        }
    }
}

/// Height reserved above an abstraction's body for its ear.
pub(crate) fn ear_row(body: Size, style: &Style) -> f64 {
    if body.height > style.grid {
        style.grid
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> Style {
        Style::default()
    }

    #[test]
    fn variable_has_no_width() {
        assert_eq!(measure(&Expr::var(3), &style()), Size::new(0.0, 30.0));
    }

    #[test]
    fn identity_skips_ear_row() {
        // 30 + 12 + 0 + 12 + 30 wide, 12 + 0 + 30 + 12 tall
        let size = measure(&Expr::func(Expr::var(0)), &style());
        assert_eq!(size, Size::new(84.0, 54.0));
    }

    #[test]
    fn application_stacks_operator_over_operand() {
        let size = measure(&Expr::appl(Expr::var(0), Expr::var(1)), &style());
        assert_eq!(size, Size::new(30.0, 60.0));
    }

    #[test]
    fn tall_body_reserves_ear_row() {
        let e = Expr::func(Expr::appl(Expr::var(0), Expr::var(0)));
        // body is 30 x 60, so the ear row is added
        assert_eq!(measure(&e, &style()), Size::new(114.0, 114.0));
    }

    #[test]
    fn application_width_uses_widest_child() {
        let e = Expr::appl(Expr::func(Expr::var(0)), Expr::var(0));
        let size = measure(&e, &style());
        assert_eq!(size, Size::new(84.0 + 30.0, 54.0 + 30.0));
    }

    #[test]
    fn nested_abstractions() {
        // λ λ 1: inner is 84 x 54, outer adds an ear row
        let e = Expr::func(Expr::func(Expr::var(1)));
        assert_eq!(measure(&e, &style()), Size::new(168.0, 108.0));
    }

    #[test]
    fn scales_with_grid() {
        let s = Style::new().with_grid(10.0).with_box_padding(0.0);
        assert_eq!(measure(&Expr::func(Expr::var(0)), &s), Size::new(20.0, 10.0));
    }

    #[test]
    fn measurement_is_repeatable() {
        let e = Expr::func(Expr::appl(
            Expr::func(Expr::appl(Expr::var(1), Expr::var(0))),
            Expr::var(0),
        ));
        let s = style();
        let first = measure(&e, &s);
        let second = measure(&e, &s);
        assert_eq!(first.width.to_bits(), second.width.to_bits());
        assert_eq!(first.height.to_bits(), second.height.to_bits());
    }
}
