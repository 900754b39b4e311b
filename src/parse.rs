//! Parse pest pairs into AST nodes

use crate::ast::Expr;
use crate::errors::ParseError;
use crate::{LambdaParser, Rule};
use miette::NamedSource;
use pest::Parser;
use pest::Span;
use pest::error::InputLocation;
use pest::iterators::Pair;

/// Parse an expression from `source`, reported as `<input>` in diagnostics.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_named("<input>", source)
}

/// Parse an expression, naming the source (usually a file name) for diagnostics.
pub fn parse_named(name: &str, source: &str) -> Result<Expr, ParseError> {
    let input = Input { name, text: source };
    let pairs = LambdaParser::parse(Rule::program, source).map_err(|e| {
        let (start, end) = match e.location {
            InputLocation::Pos(pos) => (pos, pos),
            InputLocation::Span(span) => span,
        };
        input.syntax_error(start, end, e.variant.message())
    })?;

    let expr = pairs
        .flat_map(|program| program.into_inner())
        .find(|pair| pair.as_rule() == Rule::expr);
    match expr {
        Some(pair) => {
            let expr = parse_expr(pair, &input)?;
            crate::log::debug!(expr = %expr, "parsed expression");
            Ok(expr)
        }
        None => Err(input.syntax_error(0, source.len(), "expected expression")),
    }
}

/// Text being parsed, plus the name diagnostics show for it
struct Input<'a> {
    name: &'a str,
    text: &'a str,
}

impl Input<'_> {
    fn source(&self) -> NamedSource<String> {
        NamedSource::new(self.name, self.text.to_string())
    }

    fn syntax_error(&self, start: usize, end: usize, message: impl Into<String>) -> ParseError {
        ParseError::Syntax {
            message: message.into(),
            src: self.source(),
            span: (start, end - start).into(),
        }
    }

    fn error_at(&self, span: Span<'_>, message: &str) -> ParseError {
        self.syntax_error(span.start(), span.end(), message)
    }
}

fn parse_expr(pair: Pair<'_, Rule>, input: &Input<'_>) -> Result<Expr, ParseError> {
    let span = pair.as_span();
    match pair.as_rule() {
        Rule::expr => match pair.into_inner().next() {
            Some(inner) => parse_expr(inner, input),
            None => Err(input.error_at(span, "empty expression")),
        },
        Rule::lambda => match pair.into_inner().next() {
            Some(body) => Ok(Expr::func(parse_expr(body, input)?)),
            None => Err(input.error_at(span, "expected expression after lambda")),
        },
        Rule::application => parse_application(pair, input),
        Rule::index => parse_index(pair, input),
        rule => Err(input.error_at(span, &format!("unexpected rule in expression: {rule:?}"))),
    }
}

/// Fold `a b c` into `((a b) c)`.
fn parse_application(pair: Pair<'_, Rule>, input: &Input<'_>) -> Result<Expr, ParseError> {
    let span = pair.as_span();
    let mut result: Option<Expr> = None;
    for child in pair.into_inner() {
        let term = parse_expr(child, input)?;
        result = Some(match result {
            None => term,
            Some(func) => Expr::appl(func, term),
        });
    }
    result.ok_or_else(|| input.error_at(span, "empty application"))
}

fn parse_index(pair: Pair<'_, Rule>, input: &Input<'_>) -> Result<Expr, ParseError> {
    let text = pair.as_str();
    text.parse::<usize>()
        .map(Expr::Var)
        .map_err(|_| ParseError::InvalidIndex {
            text: text.to_string(),
            src: input.source(),
            span: (pair.as_span().start(), text.len()).into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_variable() {
        assert_eq!(parse("0").unwrap(), Expr::var(0));
    }

    #[test]
    fn multi_digit_variable() {
        assert_eq!(parse("42").unwrap(), Expr::var(42));
    }

    #[test]
    fn identity() {
        assert_eq!(parse("λ 0").unwrap(), Expr::func(Expr::var(0)));
    }

    #[test]
    fn backslash_lambda() {
        assert_eq!(parse("\\ 0").unwrap().to_string(), "λ 0");
    }

    #[test]
    fn application_is_left_associative() {
        let e = parse("0 1 2").unwrap();
        assert_eq!(
            e,
            Expr::appl(Expr::appl(Expr::var(0), Expr::var(1)), Expr::var(2))
        );
    }

    #[test]
    fn parentheses_group_arguments() {
        let e = parse("0 (1 2)").unwrap();
        assert_eq!(
            e,
            Expr::appl(Expr::var(0), Expr::appl(Expr::var(1), Expr::var(2)))
        );
    }

    #[test]
    fn lambda_body_extends_right() {
        let e = parse("λ 0 0").unwrap();
        assert_eq!(e, Expr::func(Expr::appl(Expr::var(0), Expr::var(0))));
    }

    #[test]
    fn trailing_lambda_becomes_argument() {
        let e = parse("0 λ 0 1").unwrap();
        assert_eq!(
            e,
            Expr::appl(
                Expr::var(0),
                Expr::func(Expr::appl(Expr::var(0), Expr::var(1)))
            )
        );
    }

    #[test]
    fn nested_lambdas() {
        assert_eq!(
            parse("λ λ 1").unwrap(),
            Expr::func(Expr::func(Expr::var(1)))
        );
    }

    #[test]
    fn display_round_trips_through_parser() {
        for src in ["λ (λ 1 (0 0)) (λ 1 (0 0))", "(λ λ 1) (λ 0)", "0 (λ 1) 2"] {
            let e = parse(src).unwrap();
            assert_eq!(parse(&e.to_string()).unwrap(), e, "source: {src}");
        }
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(parse("  (λ\n0)\t1 ").unwrap(), parse("(λ 0) 1").unwrap());
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(parse(""), Err(ParseError::Syntax { .. })));
        assert!(matches!(parse("   "), Err(ParseError::Syntax { .. })));
    }

    #[test]
    fn unbalanced_parenthesis_rejected() {
        assert!(matches!(parse("(0 1"), Err(ParseError::Syntax { .. })));
        assert!(matches!(parse("0 1)"), Err(ParseError::Syntax { .. })));
    }

    #[test]
    fn lambda_without_body_rejected() {
        assert!(matches!(parse("λ"), Err(ParseError::Syntax { .. })));
    }

    #[test]
    fn unexpected_character_rejected() {
        assert!(matches!(parse("0 x"), Err(ParseError::Syntax { .. })));
    }

    #[test]
    fn oversized_index_rejected() {
        let err = parse("0 99999999999999999999999999").unwrap_err();
        match err {
            ParseError::InvalidIndex { text, span, .. } => {
                assert_eq!(text, "99999999999999999999999999");
                assert_eq!(span.offset(), 2);
            }
            other => panic!("expected InvalidIndex, got {other:?}"),
        }
    }
}
