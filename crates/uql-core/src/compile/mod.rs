//! Request-to-query compilation.
//!
//! [`compile`] is the single entry point: it takes one request intent plus
//! a dialect profile and produces query text with bound arguments. It is
//! stateless — the dialect is threaded as a parameter, and every placeholder
//! counter lives inside the call.

mod delete;
mod insert;
mod render;
mod select;
mod update;

pub(crate) use render::render_where;

use crate::dialect::{Dialect, PlaceholderStyle};
use crate::error::{CompileError, Result};
use crate::ident::validate_identifier;
use crate::request::{Method, QueryRequest};
use crate::value::Literal;

/// Bound arguments of a compiled query.
#[derive(Debug, Clone, PartialEq)]
pub enum Args {
    /// Positional arguments, in placeholder order.
    Positional(Vec<Literal>),
    /// Named arguments (`p1`, `p2`, …), in emission order.
    Named(Vec<(String, Literal)>),
}

impl Args {
    /// Returns the number of bound arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Positional(values) => values.len(),
            Self::Named(values) => values.len(),
        }
    }

    /// Returns whether no arguments are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a named argument.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Literal> {
        match self {
            Self::Positional(_) => None,
            Self::Named(values) => values.iter().find(|(n, _)| n == name).map(|(_, v)| v),
        }
    }

    /// Returns the positional arguments, if this is a positional set.
    #[must_use]
    pub fn as_positional(&self) -> Option<&[Literal]> {
        match self {
            Self::Positional(values) => Some(values),
            Self::Named(_) => None,
        }
    }
}

/// The compiler's sole output: query text plus its bound arguments.
///
/// Ownership transfers to the caller, which is responsible for execution.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    /// Final query text.
    pub text: String,
    /// Bound arguments, positional or named per the dialect.
    pub args: Args,
}

/// Allocates placeholders and collects their bound values.
///
/// Binding through a single counter keeps numbered placeholders strictly
/// increasing and gapless across all clauses of one statement.
pub(crate) struct ParamBinder {
    style: PlaceholderStyle,
    values: Vec<Literal>,
}

impl ParamBinder {
    pub(crate) fn new(dialect: Dialect) -> Self {
        Self {
            style: dialect.placeholder_style(),
            values: Vec::new(),
        }
    }

    /// Binds one value and returns its placeholder text.
    pub(crate) fn bind(&mut self, value: Literal) -> String {
        self.values.push(value);
        self.style.render(self.values.len())
    }

    pub(crate) fn into_args(self) -> Args {
        match self.style {
            PlaceholderStyle::Named => Args::Named(
                self.values
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (format!("p{}", i + 1), v))
                    .collect(),
            ),
            _ => Args::Positional(self.values),
        }
    }
}

/// Compiles a request into query text and bound arguments.
///
/// The request is consumed conceptually once: compiling the same request
/// twice against the same dialect yields byte-identical output.
pub fn compile(request: &QueryRequest, dialect: Dialect) -> Result<CompiledQuery> {
    validate_identifier(&request.table)?;

    match request.method {
        Method::Get => select::compile_get(request, dialect),
        Method::Post => insert::compile_post(request, dialect),
        Method::Put | Method::Patch => update::compile_update(request, dialect),
        Method::Delete => delete::compile_delete(request, dialect),
        other => Err(CompileError::UnsupportedMethod(String::from(
            other.as_str(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binder_numbering_is_gapless() {
        let mut binder = ParamBinder::new(Dialect::Postgres);
        assert_eq!(binder.bind(Literal::Int(1)), "$1");
        assert_eq!(binder.bind(Literal::Int(2)), "$2");
        assert_eq!(binder.bind(Literal::Int(3)), "$3");
    }

    #[test]
    fn test_named_binder() {
        let mut binder = ParamBinder::new(Dialect::Surreal);
        assert_eq!(binder.bind(Literal::from("A")), "$p1");
        assert_eq!(binder.bind(Literal::Int(100)), "$p2");
        let args = binder.into_args();
        assert_eq!(args.get("p2"), Some(&Literal::Int(100)));
    }

    #[test]
    fn test_invalid_table_rejected() {
        let req = QueryRequest::new(Method::Get, "users; DROP TABLE users");
        assert!(matches!(
            compile(&req, Dialect::Postgres),
            Err(CompileError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_unsupported_method() {
        let req = QueryRequest::new(Method::Options, "users");
        assert_eq!(
            compile(&req, Dialect::Postgres),
            Err(CompileError::UnsupportedMethod(String::from("OPTIONS")))
        );
    }
}
