//! GET compilation: listings, point lookups and count mode.

use crate::compile::{render_where, CompiledQuery, ParamBinder};
use crate::dialect::Dialect;
use crate::error::Result;
use crate::filter::parse_filters;
use crate::ident::{check_functions, first_function, validate_identifier, validate_record_id};
use crate::jsonpath;
use crate::page::{order_clause, paginate};
use crate::request::QueryRequest;
use crate::value::Literal;

pub(crate) fn compile_get(request: &QueryRequest, dialect: Dialect) -> Result<CompiledQuery> {
    let table = request.table.as_str();
    let projection = build_projection(&request.relations, dialect)?;
    let mut binder = ParamBinder::new(dialect);

    // Point lookup wins over everything else; remaining filters are ignored.
    if let Some(id) = &request.id {
        let text = if dialect == Dialect::Surreal {
            validate_record_id(id)?;
            format!("SELECT {projection} FROM {table}:{id}")
        } else {
            let placeholder = binder.bind(Literal::Text(id.clone()));
            format!("SELECT {projection} FROM {table} WHERE id = {placeholder}")
        };
        return Ok(CompiledQuery {
            text,
            args: binder.into_args(),
        });
    }

    let tree = parse_filters(&request.raw_filters, dialect);
    let where_sql = render_where(&tree, &mut binder);

    // Count mode shares the filter clause but skips ordering and pagination.
    // Presence of the `count` key in the query string is enough; the builder
    // flag is a convenience on top.
    if request.count || request.raw_filters.iter().any(|(key, _)| key == "count") {
        let mut text = format!("SELECT COUNT(1) AS count FROM {table}");
        if !where_sql.is_empty() {
            text.push_str(" WHERE ");
            text.push_str(&where_sql);
        }
        return Ok(CompiledQuery {
            text,
            args: binder.into_args(),
        });
    }

    let mut text = format!("SELECT {projection} FROM {table}");
    if !where_sql.is_empty() {
        text.push_str(" WHERE ");
        text.push_str(&where_sql);
    }

    if let Some(order) = &request.order {
        let order_sql = order_clause(order);
        if !order_sql.is_empty() {
            text.push_str(" ORDER BY ");
            text.push_str(&order_sql);
        }
    }

    let window = paginate(request.page.as_deref(), request.page_size.as_deref());
    text.push_str(&format!(
        " LIMIT {} {} {}",
        window.limit,
        dialect.offset_keyword(),
        window.offset
    ));

    Ok(CompiledQuery {
        text,
        args: binder.into_args(),
    })
}

/// Builds the projection list from relation entries.
///
/// An entry may be `*`, a plain column, a JSON path (rewritten and
/// aliased), or a function expression checked against the allow-list.
fn build_projection(relations: &[String], dialect: Dialect) -> Result<String> {
    if relations.is_empty() {
        return Ok(String::from("*"));
    }

    let mut columns = Vec::with_capacity(relations.len());
    for entry in relations {
        if entry == "*" {
            columns.push(String::from("*"));
        } else if jsonpath::contains_path(entry) {
            let path = jsonpath::rewrite(entry, dialect)?;
            match path.alias {
                Some(alias) => columns.push(format!("{} AS {alias}", path.expr)),
                None => columns.push(path.expr),
            }
        } else if entry.contains('(') {
            check_functions(entry)?;
            match first_function(entry) {
                Some(alias) => columns.push(format!("{entry} AS {alias}")),
                None => columns.push(entry.clone()),
            }
        } else {
            validate_identifier(entry)?;
            columns.push(entry.clone());
        }
    }
    Ok(columns.join(", "))
}
