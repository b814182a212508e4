//! Request intent passed to the compiler.
//!
//! The HTTP layer extracts these pieces from the incoming request; this
//! crate never touches the transport itself.

/// HTTP request methods with a query mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method
    Get,
    /// POST method
    Post,
    /// PUT method
    Put,
    /// PATCH method
    Patch,
    /// DELETE method
    Delete,
    /// HEAD method (no query mapping)
    Head,
    /// OPTIONS method (no query mapping)
    Options,
}

impl Method {
    /// Parses a method from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            "HEAD" => Some(Self::Head),
            "OPTIONS" => Some(Self::Options),
            _ => None,
        }
    }

    /// Returns the method as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One request's worth of compiler input.
///
/// Built fresh per HTTP request and consumed by a single
/// [`compile`](crate::compile) call; nothing here outlives the call.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    /// Request method.
    pub method: Method,
    /// Target table name (validated during compilation).
    pub table: String,
    /// Optional id path segment for point operations.
    pub id: Option<String>,
    /// Projection entries, in source order. Empty means `*`.
    pub relations: Vec<String>,
    /// Raw query-string filter pairs, in source order. Keys may repeat.
    pub raw_filters: Vec<(String, String)>,
    /// Raw request body, if any.
    pub body: Option<Vec<u8>>,
    /// Raw `page` parameter.
    pub page: Option<String>,
    /// Raw `page_size` parameter.
    pub page_size: Option<String>,
    /// Raw `order` parameter.
    pub order: Option<String>,
    /// Whether the `count` parameter was present.
    pub count: bool,
}

impl QueryRequest {
    /// Creates a request for the given method and table.
    #[must_use]
    pub fn new(method: Method, table: impl Into<String>) -> Self {
        Self {
            method,
            table: table.into(),
            id: None,
            relations: Vec::new(),
            raw_filters: Vec::new(),
            body: None,
            page: None,
            page_size: None,
            order: None,
            count: false,
        }
    }

    /// Sets the id path segment.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the projection entries.
    #[must_use]
    pub fn relations(mut self, relations: &[&str]) -> Self {
        self.relations = relations.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Appends one raw filter pair.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.raw_filters.push((key.into(), value.into()));
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the raw `page` parameter.
    #[must_use]
    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Sets the raw `page_size` parameter.
    #[must_use]
    pub fn page_size(mut self, page_size: impl Into<String>) -> Self {
        self.page_size = Some(page_size.into());
        self
    }

    /// Sets the `order` parameter.
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Marks the request as a count query.
    #[must_use]
    pub fn count(mut self) -> Self {
        self.count = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("get"), Some(Method::Get));
        assert_eq!(Method::parse("PATCH"), Some(Method::Patch));
        assert_eq!(Method::parse("OPTIONS"), Some(Method::Options));
        assert_eq!(Method::parse("TRACE"), None);
    }

    #[test]
    fn test_request_builder() {
        let req = QueryRequest::new(Method::Get, "products")
            .filter("level", "gte.10")
            .order("price.desc")
            .page("1")
            .page_size("20");
        assert_eq!(req.table, "products");
        assert_eq!(req.raw_filters.len(), 1);
        assert!(!req.count);
    }
}
