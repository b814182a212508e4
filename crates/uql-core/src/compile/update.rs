//! PUT and PATCH compilation.

use crate::body::decode_fields;
use crate::compile::{CompiledQuery, ParamBinder};
use crate::dialect::{Dialect, MutationStrategy};
use crate::error::{CompileError, Result};
use crate::ident::{validate_identifier, validate_record_id};
use crate::request::{Method, QueryRequest};
use crate::value::Literal;

pub(crate) fn compile_update(request: &QueryRequest, dialect: Dialect) -> Result<CompiledQuery> {
    let id = request.id.as_ref().ok_or(CompileError::MissingId)?;
    let body = request
        .body
        .as_deref()
        .filter(|b| !b.is_empty())
        .ok_or(CompileError::MissingBody)?;
    let fields = decode_fields(body)?;
    if fields.is_empty() {
        return Err(CompileError::NoFieldsToUpdate);
    }
    for (column, _) in &fields {
        validate_identifier(column)?;
    }

    let table = request.table.as_str();
    let mut binder = ParamBinder::new(dialect);
    let assignments: Vec<String> = fields
        .iter()
        .map(|(column, value)| {
            let placeholder = binder.bind(value.clone());
            format!("{column} = {placeholder}")
        })
        .collect();
    let assignments = assignments.join(", ");

    if dialect == Dialect::Surreal {
        validate_record_id(id)?;
        // PATCH keeps partial-update semantics via MERGE; PUT replaces via SET.
        let verb = if request.method == Method::Patch {
            "MERGE"
        } else {
            "SET"
        };
        let text = format!("UPDATE {table}:{id} {verb} {assignments} RETURN *");
        return Ok(CompiledQuery {
            text,
            args: binder.into_args(),
        });
    }

    let id_placeholder = binder.bind(Literal::Text(id.clone()));
    let mut text = format!("UPDATE {table} SET {assignments} WHERE id = {id_placeholder}");
    match dialect.mutation_strategy() {
        MutationStrategy::ReturningClause => text.push_str(" RETURNING *"),
        MutationStrategy::ReselectAfterWrite => {
            let reselect = binder.bind(Literal::Text(id.clone()));
            text.push_str(&format!("; SELECT * FROM {table} WHERE id = {reselect}"));
        }
        MutationStrategy::MergeReturn => {}
    }

    Ok(CompiledQuery {
        text,
        args: binder.into_args(),
    })
}
