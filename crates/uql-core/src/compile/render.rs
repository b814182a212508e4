//! Predicate-tree rendering.

use crate::compile::ParamBinder;
use crate::filter::{FilterExpr, FilterValue, LogicOp, Operator};

/// Renders the top-level filter tree into a WHERE-clause body.
///
/// Returns an empty string when no conditions survive parsing. Values are
/// bound left to right so argument order always matches text order.
pub(crate) fn render_where(expr: &FilterExpr, binder: &mut ParamBinder) -> String {
    match expr {
        // The implicit top-level AND group is rendered without parentheses.
        FilterExpr::Group {
            logic: LogicOp::And,
            children,
        } => join_children(children, LogicOp::And, binder),
        other => render_expr(other, binder),
    }
}

fn render_expr(expr: &FilterExpr, binder: &mut ParamBinder) -> String {
    match expr {
        FilterExpr::Condition {
            column,
            operator,
            value,
        } => render_condition(column, *operator, value, binder),
        FilterExpr::Group { logic, children } => match logic {
            LogicOp::And | LogicOp::Or => {
                let joined = join_children(children, *logic, binder);
                if joined.is_empty() {
                    joined
                } else {
                    format!("({joined})")
                }
            }
            // NOT over several children negates their conjunction.
            LogicOp::Not => {
                let joined = join_children(children, LogicOp::And, binder);
                if joined.is_empty() {
                    joined
                } else {
                    format!("NOT ({joined})")
                }
            }
        },
    }
}

fn join_children(children: &[FilterExpr], logic: LogicOp, binder: &mut ParamBinder) -> String {
    let rendered: Vec<String> = children
        .iter()
        .filter(|child| !child.is_empty())
        .map(|child| render_expr(child, binder))
        .collect();
    rendered.join(&format!(" {} ", logic.as_str()))
}

fn render_condition(
    column: &str,
    operator: Operator,
    value: &FilterValue,
    binder: &mut ParamBinder,
) -> String {
    match value {
        FilterValue::List(values) => {
            let placeholders: Vec<String> =
                values.iter().map(|v| binder.bind(v.clone())).collect();
            format!("{column} IN ({})", placeholders.join(", "))
        }
        FilterValue::Null => format!("{column} IS NULL"),
        FilterValue::Single(lit) => {
            // `is.true` / `is.false` bind the boolean through equality.
            let op = if operator == Operator::Is {
                "="
            } else {
                operator.sql()
            };
            let placeholder = binder.bind(lit.clone());
            format!("{column} {op} {placeholder}")
        }
    }
}
