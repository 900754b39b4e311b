//! Error types with rich diagnostics using miette
//!
//! Parse errors carry source spans so a bad expression is reported with the
//! offending text underlined.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while parsing lambda expressions
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("syntax error: {message}")]
    #[diagnostic(
        code(songmap::parse::syntax),
        help("expressions look like `λ 0`, `\\ 0 0` or `(λ 0) 1`")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("de Bruijn index out of range: {text}")]
    #[diagnostic(code(songmap::parse::invalid_index))]
    InvalidIndex {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("too large")]
        span: SourceSpan,
    },
}

// ============================================================================
// Style Errors
// ============================================================================

/// Errors from validating a [`Style`](crate::style::Style)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("style field `{field}` is NaN or infinite")]
    #[diagnostic(code(songmap::style::not_finite))]
    NotFinite { field: &'static str },

    #[error("style field `{field}` must be positive, got {value}")]
    #[diagnostic(
        code(songmap::style::not_positive),
        help("every other measurement is a multiple of the grid unit")
    )]
    NotPositive { field: &'static str, value: f64 },

    #[error("style field `{field}` must not be negative, got {value}")]
    #[diagnostic(code(songmap::style::negative))]
    Negative { field: &'static str, value: f64 },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors from turning a rendered document into text
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("SVG serialization failed: {message}")]
    #[diagnostic(code(songmap::render::serialize))]
    Serialize { message: String },
}
