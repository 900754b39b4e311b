//! Place pass: absolute coordinates, top-down

use crate::ast::Expr;
use crate::style::Style;
use crate::types::{Point, Rect, pt};

use super::builder::{LayoutBuilder, Output};
use super::measure::{ear_row, measure};
use super::types::{LApplicator, LBox};

/// Place `expr` with its top-left corner at `origin`.
///
/// Boxes and applicators are emitted before their children, so both lists
/// come out in pre-order. A box's depth is the number of boxes the builder
/// has open when it is placed.
pub fn place(expr: &Expr, origin: Point, style: &Style, builder: &mut LayoutBuilder) -> Output {
    let g = style.grid;
    let pad = style.box_padding;
    let (x, y) = (origin.x, origin.y);

    match expr {
        Expr::Var(index) => Output::Use {
            reference: builder.resolve(*index),
            at: pt(x, y + g / 2.0),
        },
        Expr::Func(body) => {
            let size = measure(expr, style);
            let body_size = measure(body, style);
            let ear_y = y + pad + g / 2.0;
            let throat = pt(x + size.width, ear_y);
            let depth = builder.depth();
            builder.open_box(LBox {
                rect: Rect::from_origin(origin, size),
                ear: pt(x, ear_y),
                throat,
                depth,
            });

            let body_origin = pt(x + g + pad, y + pad + ear_row(body_size, style));
            let body_out = place(body, body_origin, style, builder);
            builder.close_box();

            builder.connect(body_out, throat);
            Output::Port(throat)
        }
        Expr::Appl(func, arg) => {
            let f = measure(func, style);
            let a = measure(arg, style);
            let content_w = f.width.max(a.width);
            let total_h = f.height + a.height;

            let center = pt(x + content_w + g / 2.0, y + total_h / 2.0);
            let applicator = LApplicator {
                center,
                operator_input: pt(center.x, y + f.height / 2.0),
                operand_input: pt(x + content_w, y + f.height + a.height / 2.0),
                output: pt(center.x + g / 2.0, center.y),
            };
            builder.add_applicator(applicator.clone());

            let func_out = place(func, origin, style, builder);
            builder.connect(func_out, applicator.operator_input);
            let arg_out = place(arg, pt(x, y + f.height), style, builder);
            builder.connect(arg_out, applicator.operand_input);

            Output::Port(applicator.output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::builder::Reference;
    use crate::layout::types::LPipe;

    fn place_root(expr: &Expr) -> (LayoutBuilder, Output) {
        let mut builder = LayoutBuilder::new();
        let out = place(expr, pt(30.0, 30.0), &Style::default(), &mut builder);
        (builder, out)
    }

    #[test]
    fn variable_emits_nothing() {
        let (b, out) = place_root(&Expr::var(2));
        assert_eq!(
            out,
            Output::Use {
                reference: Reference::Free(2),
                at: pt(30.0, 45.0)
            }
        );
        assert!(b.boxes.is_empty());
        assert!(b.pipes.is_empty());
    }

    #[test]
    fn identity_box_ports() {
        let (b, out) = place_root(&Expr::func(Expr::var(0)));
        assert_eq!(out, Output::Port(pt(114.0, 57.0)));
        let lbox = &b.boxes[0];
        assert_eq!(lbox.rect, Rect::new(30.0, 30.0, 84.0, 54.0));
        assert_eq!(lbox.ear, pt(30.0, 57.0));
        assert_eq!(lbox.throat, pt(114.0, 57.0));
        assert_eq!(lbox.depth, 0);
        // the body variable feeds the throat directly
        assert!(b.pipes.is_empty());
        assert_eq!(b.bound_uses[0], vec![pt(114.0, 57.0)]);
    }

    #[test]
    fn applicator_ports() {
        let (b, out) = place_root(&Expr::appl(Expr::var(0), Expr::var(1)));
        let app = &b.applicators[0];
        assert_eq!(app.center, pt(45.0, 60.0));
        assert_eq!(app.operator_input, pt(45.0, 45.0));
        assert_eq!(app.operand_input, pt(30.0, 75.0));
        assert_eq!(app.output, pt(60.0, 60.0));
        assert_eq!(out, Output::Port(pt(60.0, 60.0)));
        assert_eq!(b.free_uses[&0], vec![pt(45.0, 45.0)]);
        assert_eq!(b.free_uses[&1], vec![pt(30.0, 75.0)]);
    }

    #[test]
    fn self_application_inside_box() {
        let (b, _) = place_root(&Expr::func(Expr::appl(Expr::var(0), Expr::var(0))));
        let app = &b.applicators[0];
        assert_eq!(app.center, pt(87.0, 102.0));
        assert_eq!(b.bound_uses[0], vec![pt(87.0, 87.0), pt(72.0, 117.0)]);
        assert_eq!(b.pipes, vec![LPipe::direct(pt(102.0, 102.0), pt(144.0, 57.0))]);
    }

    #[test]
    fn boxes_emitted_in_preorder_with_depth() {
        // λ (λ 0) (λ λ 0)
        let e = Expr::func(Expr::appl(
            Expr::func(Expr::var(0)),
            Expr::func(Expr::func(Expr::var(0))),
        ));
        let (b, _) = place_root(&e);
        let depths: Vec<_> = b.boxes.iter().map(|bx| bx.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 2]);
    }

    #[test]
    fn nested_binders_resolve_to_their_own_box() {
        // λ λ 1 0: variable 1 belongs to the outer box, 0 to the inner one
        let e = Expr::func(Expr::func(Expr::appl(Expr::var(1), Expr::var(0))));
        let (b, _) = place_root(&e);
        let app = &b.applicators[0];
        assert_eq!(b.bound_uses[0], vec![app.operator_input]);
        assert_eq!(b.bound_uses[1], vec![app.operand_input]);
    }
}
