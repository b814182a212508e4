//! # uql-core
//!
//! Compiles RESTful URL query parameters into parameterized query text for
//! PostgreSQL, MySQL, SQLite and SurrealDB.
//!
//! This crate is the pure compilation core: it parses the filter grammar
//! (`column=operator.value` with `and=`/`or=`/`not=` grouping), infers
//! literal types from raw tokens, rewrites JSON-path column references,
//! translates pagination and ordering, and emits dialect-correct text plus
//! bound arguments. It never opens a connection or executes anything —
//! the HTTP layer and database driver live elsewhere.
//!
//! ## Compiling a request
//!
//! ```rust
//! use uql_core::{compile, Args, Dialect, Literal, Method, QueryRequest};
//!
//! // GET /products?level=gte.10&order=price.desc&page=1&page_size=20
//! let request = QueryRequest::new(Method::Get, "products")
//!     .filter("level", "gte.10")
//!     .order("price.desc")
//!     .page("1")
//!     .page_size("20");
//!
//! let query = compile(&request, Dialect::Postgres).unwrap();
//! assert_eq!(
//!     query.text,
//!     "SELECT * FROM products WHERE level >= $1 ORDER BY price DESC LIMIT 20 OFFSET 0"
//! );
//! assert_eq!(query.args, Args::Positional(vec![Literal::Int(10)]));
//! ```
//!
//! ## Injection posture
//!
//! Identifiers are validated against `[A-Za-z_][A-Za-z0-9_]*`; values are
//! always passed as bound parameters, never interpolated. Malformed filter
//! tokens are dropped rather than rejected, matching permissive REST filter
//! semantics.

pub mod body;
pub mod compile;
pub mod dialect;
pub mod error;
pub mod filter;
pub mod ident;
pub mod jsonpath;
pub mod page;
pub mod request;
pub mod value;

pub use compile::{compile, Args, CompiledQuery};
pub use dialect::{Dialect, MutationStrategy, PlaceholderStyle};
pub use error::{CompileError, Result};
pub use filter::{parse_filters, FilterExpr, FilterValue, LogicOp, Operator};
pub use request::{Method, QueryRequest};
pub use value::Literal;
