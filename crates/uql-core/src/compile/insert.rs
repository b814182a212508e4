//! POST compilation: single and bulk inserts.

use crate::body::{decode_records, records_to_json, Record};
use crate::compile::{Args, CompiledQuery, ParamBinder};
use crate::dialect::{Dialect, MutationStrategy};
use crate::error::{CompileError, Result};
use crate::ident::{validate_identifier, validate_record_id};
use crate::request::QueryRequest;
use crate::value::Literal;

pub(crate) fn compile_post(request: &QueryRequest, dialect: Dialect) -> Result<CompiledQuery> {
    let body = request
        .body
        .as_deref()
        .filter(|b| !b.is_empty())
        .ok_or(CompileError::MissingBody)?;
    let records = decode_records(body)?;
    if records.is_empty() {
        return Err(CompileError::InvalidBody(String::from(
            "no records to insert",
        )));
    }
    if records[0].is_empty() {
        return Err(CompileError::InvalidBody(String::from(
            "first record has no fields",
        )));
    }

    // The column set comes from the first record; later records missing a
    // column bind NULL for it.
    let columns: Vec<&str> = records[0].iter().map(|(k, _)| k.as_str()).collect();
    for column in &columns {
        validate_identifier(column)?;
    }

    if dialect == Dialect::Surreal {
        return compile_surreal(request, &records, &columns);
    }

    let table = request.table.as_str();
    let mut binder = ParamBinder::new(dialect);
    let mut tuples = Vec::with_capacity(records.len());
    for record in &records {
        let placeholders: Vec<String> = columns
            .iter()
            .map(|&column| binder.bind(field_value(record, column)))
            .collect();
        tuples.push(format!("({})", placeholders.join(", ")));
    }

    let mut text = format!(
        "INSERT INTO {table} ({}) VALUES {}",
        columns.join(", "),
        tuples.join(", ")
    );
    match dialect.mutation_strategy() {
        MutationStrategy::ReturningClause => text.push_str(" RETURNING *"),
        MutationStrategy::ReselectAfterWrite => {
            let accessor = dialect.last_insert_accessor().unwrap_or_default();
            text.push_str(&format!("; SELECT * FROM {table} WHERE id = {accessor}"));
        }
        MutationStrategy::MergeReturn => {}
    }

    Ok(CompiledQuery {
        text,
        args: binder.into_args(),
    })
}

/// SurrealDB: a single object becomes `CREATE … SET` with named bindings;
/// an array body embeds the serialized records after the table name.
fn compile_surreal(
    request: &QueryRequest,
    records: &[Record],
    columns: &[&str],
) -> Result<CompiledQuery> {
    let table = request.table.as_str();
    if let Some(id) = &request.id {
        validate_record_id(id)?;
    }

    if records.len() == 1 {
        let mut binder = ParamBinder::new(Dialect::Surreal);
        let fields: Vec<String> = columns
            .iter()
            .map(|&column| {
                let placeholder = binder.bind(field_value(&records[0], column));
                format!("{column} = {placeholder}")
            })
            .collect();
        let text = format!("CREATE {table} SET {} RETURN *", fields.join(", "));
        return Ok(CompiledQuery {
            text,
            args: binder.into_args(),
        });
    }

    let text = format!("INSERT INTO {table} {} RETURN *", records_to_json(records));
    Ok(CompiledQuery {
        text,
        args: Args::Named(Vec::new()),
    })
}

fn field_value(record: &Record, column: &str) -> Literal {
    record
        .iter()
        .find(|(k, _)| k.as_str() == column)
        .map_or(Literal::Null, |(_, v)| v.clone())
}
