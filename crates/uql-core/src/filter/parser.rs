//! Query-string filter parsing.
//!
//! Grammar: leaf conditions are `column=operator.value`; logical grouping
//! uses `and=(...)`, `or=(...)`, `not=(...)` with comma-separated members
//! and arbitrary nesting. Malformed tokens are dropped with a warning —
//! unrecognized filters never block a request.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::dialect::Dialect;
use crate::filter::{FilterExpr, FilterValue, LogicOp, Operator};
use crate::ident::is_valid_identifier;
use crate::jsonpath;
use crate::value::Literal;

/// Top-level keys that are never filter conditions.
pub const RESERVED_KEYS: &[&str] = &["select", "order", "count", "page", "page_size"];

static CONDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([A-Za-z_][A-Za-z0-9_>'"-]*)=([a-z]+)\.(.+)$"#).expect("condition regex")
});

/// Parses raw query-string pairs into a single top-level AND group.
///
/// Reserved keys are skipped. Pair order is preserved, though the top-level
/// group is an AND of all clauses so position does not change its meaning.
#[must_use]
pub fn parse_filters(pairs: &[(String, String)], dialect: Dialect) -> FilterExpr {
    let mut children = Vec::new();
    for (key, value) in pairs {
        if RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        if let Some(logic) = LogicOp::parse(key) {
            children.push(parse_group(logic, value, dialect));
        } else if let Some((op, raw)) = value.split_once('.') {
            if let Some(cond) = parse_condition(key, op, raw, dialect) {
                children.push(cond);
            }
        } else {
            warn!(key = key.as_str(), "dropping filter without an operator");
        }
    }
    FilterExpr::Group {
        logic: LogicOp::And,
        children,
    }
}

/// Parses a group body like `(level=lt.2,or=(hidden=is.false))`.
fn parse_group(logic: LogicOp, body: &str, dialect: Dialect) -> FilterExpr {
    // Strip one layer of enclosing parentheses.
    let body = body
        .strip_prefix('(')
        .and_then(|b| b.strip_suffix(')'))
        .unwrap_or(body);

    let mut children = Vec::new();
    for part in split_top_level(body) {
        if let Some(child) = parse_part(&part, dialect) {
            children.push(child);
        }
    }
    FilterExpr::Group { logic, children }
}

/// Parses one comma-separated group member: either a nested group or a
/// leaf condition.
fn parse_part(part: &str, dialect: Dialect) -> Option<FilterExpr> {
    for (prefix, logic) in [
        ("and=", LogicOp::And),
        ("or=", LogicOp::Or),
        ("not=", LogicOp::Not),
    ] {
        if let Some(body) = part.strip_prefix(prefix) {
            return Some(parse_group(logic, body, dialect));
        }
    }

    let Some(caps) = CONDITION.captures(part) else {
        warn!(part, "dropping malformed filter token");
        return None;
    };
    let (column, op, raw) = (&caps[1], &caps[2], &caps[3]);
    parse_condition(column, op, raw, dialect)
}

/// Parses a leaf condition. Returns `None` (and warns) when the column,
/// operator or value is unusable.
fn parse_condition(column: &str, op: &str, raw: &str, dialect: Dialect) -> Option<FilterExpr> {
    let column = if jsonpath::contains_path(column) {
        match jsonpath::rewrite(column, dialect) {
            Ok(path) => path.expr,
            Err(err) => {
                warn!(column, %err, "dropping filter with invalid path column");
                return None;
            }
        }
    } else {
        if !is_valid_identifier(column) {
            warn!(column, "dropping filter with invalid column");
            return None;
        }
        String::from(column)
    };

    let Some(operator) = Operator::parse(op) else {
        warn!(op, "dropping filter with unsupported operator");
        return None;
    };

    let value = match operator {
        Operator::In => {
            let list = raw
                .trim_start_matches('(')
                .trim_end_matches(')')
                .split(',')
                .map(Literal::infer)
                .collect();
            FilterValue::List(list)
        }
        Operator::Is => {
            if raw.eq_ignore_ascii_case("null") {
                FilterValue::Null
            } else if raw.eq_ignore_ascii_case("true") {
                FilterValue::Single(Literal::Bool(true))
            } else if raw.eq_ignore_ascii_case("false") {
                FilterValue::Single(Literal::Bool(false))
            } else {
                warn!(raw, "dropping `is` filter: value must be true, false or null");
                return None;
            }
        }
        Operator::Like => FilterValue::Single(Literal::Text(raw.replace('*', "%"))),
        _ => FilterValue::Single(Literal::infer(raw)),
    };

    Some(FilterExpr::Condition {
        column,
        operator,
        value,
    })
}

/// Splits on commas at parenthesis depth zero only.
fn split_top_level(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0_i32;
    let mut current = String::new();

    for ch in input.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
