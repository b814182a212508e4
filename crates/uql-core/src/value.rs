//! Literal values bound to compiled queries.
//!
//! Values are always passed to the driver as bound parameters, never
//! interpolated into query text.

use serde_json::Value;

/// A typed literal bound to a query placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer value.
    Int(i64),
    /// 64-bit float value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl Literal {
    /// Infers a literal from a raw query-string token.
    ///
    /// The trial order is strict: boolean (case-insensitive `true`/`false`),
    /// then integer, then float, then text. `"25"` infers as `Int(25)` and
    /// `"25.0"` as `Float(25.0)`. Integers are parsed in base 10 only, so
    /// `"0x1a"` stays text. Inference never fails; anything unparseable is
    /// kept as text.
    #[must_use]
    pub fn infer(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }
        if let Ok(i) = raw.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(f) = raw.parse::<f64>() {
            return Self::Float(f);
        }
        Self::Text(String::from(raw))
    }

    /// Converts a decoded JSON body value into a literal.
    ///
    /// JSON numbers keep their own type (integer vs. float per their
    /// syntax), so no trial inference is applied here. Nested arrays and
    /// objects are carried as their compact JSON text.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Self::Text(s.clone()),
            nested => Self::Text(nested.to_string()),
        }
    }

    /// Converts the literal back into a JSON value.
    ///
    /// Used when a dialect embeds record data directly in the query text
    /// instead of binding it.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Self::Text(s) => Value::String(s.clone()),
        }
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Literal {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Literal {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::Text(String::from(s))
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
