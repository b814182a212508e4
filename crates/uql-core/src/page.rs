//! Pagination and ordering translation.

use tracing::warn;

use crate::ident::is_valid_identifier;

/// Default page number.
pub const DEFAULT_PAGE: u64 = 1;
/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 100;
/// Upper bound on the page size, to keep result sets sane.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// A resolved limit/offset window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Row limit (`page_size`).
    pub limit: u64,
    /// Row offset (`(page - 1) * page_size`).
    pub offset: u64,
}

/// Resolves raw `page`/`page_size` parameters into a window.
///
/// Both parse permissively: non-numeric or non-positive input falls back to
/// the default instead of erroring, and the page size is clamped to
/// [`MAX_PAGE_SIZE`].
#[must_use]
pub fn paginate(page: Option<&str>, page_size: Option<&str>) -> PageWindow {
    let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
    let page_size = parse_positive(page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);

    // Saturate: an absurd page number must not overflow the offset.
    PageWindow {
        limit: page_size,
        offset: page.saturating_sub(1).saturating_mul(page_size),
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.parse::<u64>().ok()).filter(|n| *n > 0)
}

/// Translates `order=col.desc,col2` into an `ORDER BY` body.
///
/// Direction defaults to ascending; unknown direction tokens also mean
/// ascending. Entries with invalid column names are skipped. Returns an
/// empty string when nothing survives.
#[must_use]
pub fn order_clause(order: &str) -> String {
    let mut entries = Vec::new();
    for part in order.split(',') {
        let (column, dir) = match part.split_once('.') {
            Some((column, "desc")) => (column, "DESC"),
            Some((column, _)) => (column, "ASC"),
            None => (part, "ASC"),
        };
        let column = column.trim();
        if !is_valid_identifier(column) {
            warn!(column, "skipping order entry with invalid column");
            continue;
        }
        entries.push(format!("{column} {dir}"));
    }
    entries.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let w = paginate(None, None);
        assert_eq!(w, PageWindow { limit: 100, offset: 0 });
    }

    #[test]
    fn test_offset_from_page() {
        let w = paginate(Some("2"), Some("10"));
        assert_eq!(w, PageWindow { limit: 10, offset: 10 });
    }

    #[test]
    fn test_permissive_fallbacks() {
        assert_eq!(paginate(Some("abc"), Some("-5")), paginate(None, None));
        assert_eq!(paginate(Some("0"), Some("0")), paginate(None, None));
    }

    #[test]
    fn test_huge_page_saturates_instead_of_overflowing() {
        let w = paginate(Some("10000000000000000000"), Some("1000"));
        assert_eq!(w.limit, 1000);
        assert_eq!(w.offset, u64::MAX);
    }

    #[test]
    fn test_page_size_clamp() {
        let w = paginate(Some("1"), Some("99999"));
        assert_eq!(w.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_order_directions() {
        assert_eq!(order_clause("price.desc,name"), "price DESC, name ASC");
        assert_eq!(order_clause("id.asc"), "id ASC");
        // Unknown direction tokens default to ascending.
        assert_eq!(order_clause("id.sideways"), "id ASC");
    }

    #[test]
    fn test_order_skips_invalid_columns() {
        assert_eq!(order_clause("pri ce.desc,name"), "name ASC");
        assert_eq!(order_clause("1;drop"), "");
    }
}
