//! JSON-path column rewriting.
//!
//! A column reference like `profile->address->city` is rewritten into the
//! dialect's native path-accessor syntax. The last non-numeric segment
//! doubles as the display alias when the column appears in a projection;
//! predicates never use the alias.

use crate::dialect::Dialect;
use crate::error::{CompileError, Result};
use crate::ident::is_valid_identifier;

/// The path-separator token in source column references.
pub const PATH_SEPARATOR: &str = "->";

/// A rewritten path expression plus its display alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    /// Dialect-native accessor expression.
    pub expr: String,
    /// Alias taken from the last non-numeric segment, if any.
    pub alias: Option<String>,
}

/// Returns whether a column reference contains a path separator.
#[must_use]
pub fn contains_path(column: &str) -> bool {
    column.contains(PATH_SEPARATOR)
}

/// Rewrites `column->seg->…` into the dialect's accessor syntax.
///
/// Segments may carry a leading `>` (requesting the text-extraction
/// double-arrow variant where the dialect has one) and may be quoted in
/// the source; both are stripped before validation. A segment parseable as
/// a non-negative integer is an array index.
pub fn rewrite(column: &str, dialect: Dialect) -> Result<PathExpr> {
    let mut parts = column.split(PATH_SEPARATOR);
    let root = parts.next().unwrap_or_default();
    if !is_valid_identifier(root) {
        return Err(CompileError::InvalidIdentifier(String::from(root)));
    }

    let mut segments = Vec::new();
    for raw in parts {
        let double_arrow = raw.starts_with('>');
        let seg = raw
            .trim_start_matches('>')
            .trim_matches(|c| c == '\'' || c == '"');
        let index = seg.parse::<u64>().ok();
        if index.is_none() && !is_valid_identifier(seg) {
            return Err(CompileError::InvalidIdentifier(String::from(seg)));
        }
        segments.push(Segment {
            text: String::from(seg),
            index,
            double_arrow,
        });
    }

    let alias = segments
        .iter()
        .rev()
        .find(|s| s.index.is_none())
        .map(|s| s.text.clone());

    let expr = match dialect {
        Dialect::Postgres | Dialect::Sqlite => arrow_chain(root, &segments),
        Dialect::MySql => dollar_path(root, &segments),
        Dialect::Surreal => dotted_path(root, &segments),
    };

    Ok(PathExpr { expr, alias })
}

struct Segment {
    text: String,
    index: Option<u64>,
    double_arrow: bool,
}

/// `profile->'address'->>'city'` — index segments stay bare, key segments
/// are quoted, and a requested double arrow is preserved per segment.
fn arrow_chain(root: &str, segments: &[Segment]) -> String {
    let mut expr = String::from(root);
    for seg in segments {
        expr.push_str("->");
        if seg.double_arrow {
            expr.push('>');
        }
        if seg.index.is_some() {
            expr.push_str(&seg.text);
        } else {
            expr.push('\'');
            expr.push_str(&seg.text);
            expr.push('\'');
        }
    }
    expr
}

/// `profile->'$.address[0].city'` — one quoted `$` path after the column.
fn dollar_path(root: &str, segments: &[Segment]) -> String {
    let mut path = String::new();
    for seg in segments {
        if let Some(index) = seg.index {
            path.push_str(&format!("[{index}]"));
        } else {
            path.push('.');
            path.push_str(&seg.text);
        }
    }
    format!("{root}->'${path}'")
}

/// `profile.address[0].city` — SurrealDB uses plain dotted access.
fn dotted_path(root: &str, segments: &[Segment]) -> String {
    let mut expr = String::from(root);
    for seg in segments {
        if let Some(index) = seg.index {
            expr.push_str(&format!("[{index}]"));
        } else {
            expr.push('.');
            expr.push_str(&seg.text);
        }
    }
    expr
}
