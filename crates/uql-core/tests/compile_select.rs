//! End-to-end GET compilation across dialects.

use uql_core::{compile, Args, Dialect, Literal, Method, QueryRequest};

#[test]
fn list_with_filter_order_and_pagination() {
    let request = QueryRequest::new(Method::Get, "products")
        .filter("level", "gte.10")
        .order("price.desc")
        .page("1")
        .page_size("20");

    let q = compile(&request, Dialect::Postgres).unwrap();
    assert_eq!(
        q.text,
        "SELECT * FROM products WHERE level >= $1 ORDER BY price DESC LIMIT 20 OFFSET 0"
    );
    assert_eq!(q.args, Args::Positional(vec![Literal::Int(10)]));
}

#[test]
fn surreal_uses_start_instead_of_offset() {
    let request = QueryRequest::new(Method::Get, "products")
        .order("level.asc")
        .page("2")
        .page_size("10");

    let q = compile(&request, Dialect::Surreal).unwrap();
    assert_eq!(
        q.text,
        "SELECT * FROM products ORDER BY level ASC LIMIT 10 START 10"
    );
    assert!(q.args.is_empty());
}

#[test]
fn plain_list_has_default_window() {
    let q = compile(
        &QueryRequest::new(Method::Get, "users"),
        Dialect::MySql,
    )
    .unwrap();
    assert_eq!(q.text, "SELECT * FROM users LIMIT 100 OFFSET 0");
}

#[test]
fn point_lookup_binds_id_and_ignores_filters() {
    let request = QueryRequest::new(Method::Get, "users")
        .id("123")
        .filter("level", "gte.10");

    let q = compile(&request, Dialect::Postgres).unwrap();
    assert_eq!(q.text, "SELECT * FROM users WHERE id = $1");
    assert_eq!(q.args, Args::Positional(vec![Literal::from("123")]));

    let q = compile(&request, Dialect::Surreal).unwrap();
    assert_eq!(q.text, "SELECT * FROM users:123");
    assert!(q.args.is_empty());
}

#[test]
fn relations_form_the_projection() {
    let request = QueryRequest::new(Method::Get, "users").relations(&["email", "name"]);
    let q = compile(&request, Dialect::Sqlite).unwrap();
    assert_eq!(q.text, "SELECT email, name FROM users LIMIT 100 OFFSET 0");
}

#[test]
fn json_path_projection_gets_alias_per_dialect() {
    let request =
        QueryRequest::new(Method::Get, "users").relations(&["profile->address->city"]);

    let q = compile(&request, Dialect::Postgres).unwrap();
    assert_eq!(
        q.text,
        "SELECT profile->'address'->'city' AS city FROM users LIMIT 100 OFFSET 0"
    );

    let q = compile(&request, Dialect::MySql).unwrap();
    assert_eq!(
        q.text,
        "SELECT profile->'$.address.city' AS city FROM users LIMIT 100 OFFSET 0"
    );
}

#[test]
fn json_path_predicate_has_no_alias() {
    let request = QueryRequest::new(Method::Get, "users").filter("profile->age", "gte.21");
    let q = compile(&request, Dialect::Postgres).unwrap();
    assert_eq!(
        q.text,
        "SELECT * FROM users WHERE profile->'age' >= $1 LIMIT 100 OFFSET 0"
    );
    assert_eq!(q.args, Args::Positional(vec![Literal::Int(21)]));
}

#[test]
fn count_mode_skips_ordering_and_pagination() {
    let request = QueryRequest::new(Method::Get, "products")
        .filter("level", "lt.2")
        .order("price.desc")
        .count();

    let q = compile(&request, Dialect::Postgres).unwrap();
    assert_eq!(q.text, "SELECT COUNT(1) AS count FROM products WHERE level < $1");
    assert_eq!(q.args, Args::Positional(vec![Literal::Int(2)]));
}

#[test]
fn count_mode_without_filters() {
    let request = QueryRequest::new(Method::Get, "products").count();
    let q = compile(&request, Dialect::Sqlite).unwrap();
    assert_eq!(q.text, "SELECT COUNT(1) AS count FROM products");
}

#[test]
fn count_key_in_the_query_string_triggers_count_mode() {
    // The key arrives through the raw multimap, not the builder flag.
    let request = QueryRequest::new(Method::Get, "products")
        .filter("level", "lt.2")
        .filter("count", "");

    let q = compile(&request, Dialect::Postgres).unwrap();
    assert_eq!(q.text, "SELECT COUNT(1) AS count FROM products WHERE level < $1");
    assert_eq!(q.args, Args::Positional(vec![Literal::Int(2)]));
}

#[test]
fn absurd_page_number_saturates_the_offset() {
    let request = QueryRequest::new(Method::Get, "products")
        .page("10000000000000000000")
        .page_size("1000");

    let q = compile(&request, Dialect::Postgres).unwrap();
    assert_eq!(
        q.text,
        format!("SELECT * FROM products LIMIT 1000 OFFSET {}", u64::MAX)
    );
}

#[test]
fn compilation_is_idempotent() {
    let request = QueryRequest::new(Method::Get, "products")
        .filter("or", "(level=lt.2,hidden=is.false)")
        .filter("name", "like.*son*")
        .page("3")
        .page_size("7");

    let first = compile(&request, Dialect::Postgres).unwrap();
    let second = compile(&request, Dialect::Postgres).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unknown_filters_do_not_block_the_request() {
    let request = QueryRequest::new(Method::Get, "products")
        .filter("level", "almost.2")
        .filter("price", "gt.9.5");

    let q = compile(&request, Dialect::Postgres).unwrap();
    assert_eq!(
        q.text,
        "SELECT * FROM products WHERE price > $1 LIMIT 100 OFFSET 0"
    );
    assert_eq!(q.args, Args::Positional(vec![Literal::Float(9.5)]));
}
