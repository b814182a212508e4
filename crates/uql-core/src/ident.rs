//! Identifier validation and the projection function allow-list.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CompileError, Result};

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex"));

static FUNCTION_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\s*\(").expect("function regex"));

/// Functions permitted inside projection expressions.
pub const ALLOWED_FUNCTIONS: &[&str] = &[
    // math functions
    "abs", "avg", "ceil", "div", "exp", "floor", "gcd", "lcm", "ln", "log", "mod", "power",
    "round", "sign", "sqrt", "trunc", "max", "min", "sum",
    // date functions
    "date", "date_format", "date_part", "date_trunc", "extract", "hour", "minute", "month",
    "second", "utctimestamp", "weekofday", "year", "time", "datetime", "julianday", "unixepoch",
    "strftime",
    // string functions
    "bit_length", "chr", "char_length", "left", "length", "ord", "trim",
];

/// Returns whether `name` is a valid bare identifier.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Validates a table or column name.
///
/// Rejects empty strings, leading digits, and any character outside
/// `[A-Za-z0-9_]` (whitespace, quotes and semicolons included).
pub fn validate_identifier(name: &str) -> Result<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(CompileError::InvalidIdentifier(String::from(name)))
    }
}

/// Validates an id path segment that a dialect embeds directly in query
/// text (SurrealDB's `table:id` addressing).
///
/// Ids bound as parameters need no validation; embedded ones must not
/// carry whitespace, quotes or semicolons.
pub fn validate_record_id(id: &str) -> Result<()> {
    if !id.is_empty() && !id.contains([' ', ';', '\'', '"', '`']) {
        Ok(())
    } else {
        Err(CompileError::InvalidIdentifier(String::from(id)))
    }
}

/// Checks every function invoked by a projection expression against the
/// allow-list.
pub fn check_functions(expr: &str) -> Result<()> {
    for caps in FUNCTION_CALL.captures_iter(expr) {
        let name = caps[1].to_ascii_lowercase();
        if !ALLOWED_FUNCTIONS.contains(&name.as_str()) {
            return Err(CompileError::FunctionNotAllowed(name));
        }
    }
    Ok(())
}

/// Returns the first function name in a projection expression, if any.
#[must_use]
pub fn first_function(expr: &str) -> Option<String> {
    FUNCTION_CALL
        .captures(expr)
        .map(|caps| caps[1].to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("users"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("col_2"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("123table"));
        assert!(!is_valid_identifier("users; DROP TABLE users"));
        assert!(!is_valid_identifier("na me"));
        assert!(!is_valid_identifier("na'me"));
        assert!(!is_valid_identifier("na\"me"));
    }

    #[test]
    fn test_validate_returns_error() {
        assert_eq!(
            validate_identifier("1bad"),
            Err(CompileError::InvalidIdentifier(String::from("1bad")))
        );
    }

    #[test]
    fn test_record_ids() {
        assert!(validate_record_id("123").is_ok());
        assert!(validate_record_id("user_7f").is_ok());
        assert!(validate_record_id("1; DROP").is_err());
        assert!(validate_record_id("").is_err());
    }

    #[test]
    fn test_allowed_function() {
        assert!(check_functions("sum(price)").is_ok());
        assert!(check_functions("round(avg(price))").is_ok());
    }

    #[test]
    fn test_disallowed_function() {
        assert_eq!(
            check_functions("pg_sleep(10)"),
            Err(CompileError::FunctionNotAllowed(String::from("pg_sleep")))
        );
        // One bad call among allowed ones still fails.
        assert!(check_functions("sum(load_extension(x))").is_err());
    }

    #[test]
    fn test_first_function() {
        assert_eq!(first_function("sum(price)"), Some(String::from("sum")));
        assert_eq!(first_function("price"), None);
    }
}
