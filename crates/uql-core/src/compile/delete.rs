//! DELETE compilation.
//!
//! Deleting a whole table unconditionally is disallowed: the request must
//! carry either an id or at least one usable filter condition.

use crate::compile::{render_where, Args, CompiledQuery, ParamBinder};
use crate::dialect::Dialect;
use crate::error::{CompileError, Result};
use crate::filter::parse_filters;
use crate::ident::validate_record_id;
use crate::request::QueryRequest;
use crate::value::Literal;

pub(crate) fn compile_delete(request: &QueryRequest, dialect: Dialect) -> Result<CompiledQuery> {
    let table = request.table.as_str();

    // Point delete; any filters present are ignored.
    if let Some(id) = &request.id {
        if dialect == Dialect::Surreal {
            validate_record_id(id)?;
            return Ok(CompiledQuery {
                text: format!("DELETE {table}:{id}"),
                args: Args::Named(Vec::new()),
            });
        }
        let mut binder = ParamBinder::new(dialect);
        let placeholder = binder.bind(Literal::Text(id.clone()));
        return Ok(CompiledQuery {
            text: format!("DELETE FROM {table} WHERE id = {placeholder}"),
            args: binder.into_args(),
        });
    }

    let tree = parse_filters(&request.raw_filters, dialect);
    let mut binder = ParamBinder::new(dialect);
    let where_sql = render_where(&tree, &mut binder);
    if where_sql.is_empty() {
        return Err(CompileError::ConditionRequired);
    }

    let text = if dialect == Dialect::Surreal {
        format!("DELETE {table} WHERE {where_sql}")
    } else {
        format!("DELETE FROM {table} WHERE {where_sql}")
    };
    Ok(CompiledQuery {
        text,
        args: binder.into_args(),
    })
}
