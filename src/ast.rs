//! Abstract Syntax Tree for de Bruijn-indexed lambda expressions
//!
//! A variable is a number counting the abstractions between it and its
//! binder. An index at or beyond the number of enclosing abstractions refers
//! to a free variable.

use std::fmt;

/// A lambda expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Variable reference by de Bruijn index
    Var(usize),
    /// Single-argument abstraction: λ body
    Func(Box<Expr>),
    /// Application of a function to an argument
    Appl(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(index: usize) -> Self {
        Expr::Var(index)
    }

    pub fn func(body: Expr) -> Self {
        Expr::Func(Box::new(body))
    }

    pub fn appl(func: Expr, arg: Expr) -> Self {
        Expr::Appl(Box::new(func), Box::new(arg))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(index) => write!(f, "{index}"),
            Expr::Func(body) => write!(f, "λ {body}"),
            Expr::Appl(func, arg) => {
                match func.as_ref() {
                    Expr::Func(_) => write!(f, "({func})")?,
                    _ => write!(f, "{func}")?,
                }
                match arg.as_ref() {
                    Expr::Var(_) => write!(f, " {arg}"),
                    _ => write!(f, " ({arg})"),
                }
            }
        }
    }
}
