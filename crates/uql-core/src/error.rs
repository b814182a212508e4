//! Error types for query compilation.

use thiserror::Error;

/// Errors raised while compiling a request into a query.
///
/// All variants signal malformed client input; none are retryable and a
/// failed compile leaves no state behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    /// A table or column name failed identifier validation.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// The request method requires a body and none was supplied.
    #[error("request body is required")]
    MissingBody,

    /// The request body is not a JSON object or array of objects.
    #[error("invalid JSON body: {0}")]
    InvalidBody(String),

    /// The request method requires an id path segment.
    #[error("record id is required")]
    MissingId,

    /// An update body decoded to zero fields.
    #[error("no fields to update")]
    NoFieldsToUpdate,

    /// A DELETE was issued with neither an id nor a filter condition.
    #[error("a condition is required, deleting a whole table is not allowed")]
    ConditionRequired,

    /// The HTTP method has no query mapping.
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    /// A projected expression calls a function outside the allow-list.
    #[error("function not allowed: {0}")]
    FunctionNotAllowed(String),
}

/// Result type alias for compile operations.
pub type Result<T> = std::result::Result<T, CompileError>;
