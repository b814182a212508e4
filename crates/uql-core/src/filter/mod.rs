//! Predicate tree for URL filter expressions.
//!
//! The query string `level=lt.2&or=(a=eq.1,b=eq.2)` parses into a tree of
//! conditions and logical groups; the compiler renders the tree into a
//! dialect-specific WHERE clause.

mod parser;

pub use parser::parse_filters;

use crate::value::Literal;

/// Logical connective of a filter group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    /// All children must hold.
    And,
    /// At least one child must hold.
    Or,
    /// The conjunction of the children is negated.
    Not,
}

impl LogicOp {
    /// Parses a grouping key (`and`, `or`, `not`).
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "not" => Some(Self::Not),
            _ => None,
        }
    }

    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

/// Comparison operators of the filter grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Equal (`=`)
    Eq,
    /// Not equal (`<>`)
    Ne,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Gte,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Lte,
    /// `IS` — restricted to `true`, `false` and `null`
    Is,
    /// `LIKE` with `*` translated to `%`
    Like,
    /// `IN` with a parenthesized value list
    In,
}

impl Operator {
    /// Parses an operator token from the filter grammar.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "eq" => Some(Self::Eq),
            "ne" => Some(Self::Ne),
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            "is" => Some(Self::Is),
            "like" => Some(Self::Like),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    /// Returns the canonical SQL operator.
    #[must_use]
    pub const fn sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Is => "IS",
            Self::Like => "LIKE",
            Self::In => "IN",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql())
    }
}

/// The right-hand side of a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// A single bound literal.
    Single(Literal),
    /// A list of bound literals (the `in` operator).
    List(Vec<Literal>),
    /// `IS NULL`, rendered inline with no binding.
    Null,
}

/// A parsed filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpr {
    /// A leaf predicate.
    Condition {
        /// Column expression (already path-rewritten where applicable).
        column: String,
        /// Comparison operator.
        operator: Operator,
        /// Right-hand side.
        value: FilterValue,
    },
    /// A logical combination; children keep source order.
    Group {
        /// Connective joining the children.
        logic: LogicOp,
        /// Nested expressions.
        children: Vec<FilterExpr>,
    },
}

impl FilterExpr {
    /// Returns whether the expression contains no conditions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Condition { .. } => false,
            Self::Group { children, .. } => children.iter().all(Self::is_empty),
        }
    }

    /// Counts the leaf conditions in the tree.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        match self {
            Self::Condition { .. } => 1,
            Self::Group { children, .. } => children.iter().map(Self::condition_count).sum(),
        }
    }
}
