//! Target dialect profiles.
//!
//! The supported dialects form a closed set, so each profile is a variant
//! of one enum rather than a trait object. A single compiler consumes the
//! profile; dialects never reimplement query assembly themselves.

/// How a dialect spells bind-parameter placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// Positional numbered placeholders: `$1`, `$2`, …
    Numbered,
    /// Positional unnumbered placeholders: `?`
    Unnumbered,
    /// Named placeholders with synthetic names: `$p1`, `$p2`, …
    Named,
}

impl PlaceholderStyle {
    /// Renders the placeholder for the 1-based parameter `index`.
    #[must_use]
    pub fn render(self, index: usize) -> String {
        match self {
            Self::Numbered => format!("${index}"),
            Self::Unnumbered => String::from("?"),
            Self::Named => format!("$p{index}"),
        }
    }
}

/// How a dialect returns post-write row state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStrategy {
    /// `RETURNING *` appended to the write statement.
    ReturningClause,
    /// A follow-up `; SELECT * FROM t WHERE id = …` statement.
    ReselectAfterWrite,
    /// `RETURN *` on create/update, `MERGE … RETURN *` on partial update.
    MergeReturn,
}

/// A target query dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// PostgreSQL: `$n` placeholders, `RETURNING *`, double-quote quoting.
    Postgres,
    /// MySQL: `?` placeholders, reselect via `LAST_INSERT_ID()`, backticks.
    MySql,
    /// SQLite: `?` placeholders, reselect via `last_insert_rowid()`.
    Sqlite,
    /// SurrealDB: named `$pn` placeholders, `RETURN *`, `table:id` records.
    Surreal,
}

impl Dialect {
    /// Returns the name of the dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
            Self::Surreal => "surrealdb",
        }
    }

    /// Returns the placeholder style.
    #[must_use]
    pub const fn placeholder_style(self) -> PlaceholderStyle {
        match self {
            Self::Postgres => PlaceholderStyle::Numbered,
            Self::MySql | Self::Sqlite => PlaceholderStyle::Unnumbered,
            Self::Surreal => PlaceholderStyle::Named,
        }
    }

    /// Returns the mutation strategy.
    #[must_use]
    pub const fn mutation_strategy(self) -> MutationStrategy {
        match self {
            Self::Postgres => MutationStrategy::ReturningClause,
            Self::MySql | Self::Sqlite => MutationStrategy::ReselectAfterWrite,
            Self::Surreal => MutationStrategy::MergeReturn,
        }
    }

    /// Returns the keyword introducing a row offset.
    #[must_use]
    pub const fn offset_keyword(self) -> &'static str {
        match self {
            Self::Surreal => "START",
            _ => "OFFSET",
        }
    }

    /// Returns the auto-increment accessor used by the reselect strategy.
    #[must_use]
    pub const fn last_insert_accessor(self) -> Option<&'static str> {
        match self {
            Self::MySql => Some("LAST_INSERT_ID()"),
            Self::Sqlite => Some("last_insert_rowid()"),
            _ => None,
        }
    }

    /// Quotes an identifier according to the dialect's rule.
    ///
    /// PostgreSQL and SQLite double-quote with internal quotes doubled,
    /// MySQL uses backticks with internal backticks doubled, and SurrealDB
    /// leaves identifiers bare.
    #[must_use]
    pub fn quote_identifier(self, name: &str) -> String {
        match self {
            Self::Postgres | Self::Sqlite => {
                format!("\"{}\"", name.replace('"', "\"\""))
            }
            Self::MySql => format!("`{}`", name.replace('`', "``")),
            Self::Surreal => String::from(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_rendering() {
        assert_eq!(PlaceholderStyle::Numbered.render(3), "$3");
        assert_eq!(PlaceholderStyle::Unnumbered.render(3), "?");
        assert_eq!(PlaceholderStyle::Named.render(3), "$p3");
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(Dialect::Postgres.quote_identifier("name"), "\"name\"");
        assert_eq!(Dialect::Postgres.quote_identifier("na\"me"), "\"na\"\"me\"");
        assert_eq!(Dialect::MySql.quote_identifier("name"), "`name`");
        assert_eq!(Dialect::MySql.quote_identifier("na`me"), "`na``me`");
        assert_eq!(Dialect::Sqlite.quote_identifier("name"), "\"name\"");
        assert_eq!(Dialect::Surreal.quote_identifier("name"), "name");
    }

    #[test]
    fn test_profiles() {
        assert_eq!(
            Dialect::Postgres.mutation_strategy(),
            MutationStrategy::ReturningClause
        );
        assert_eq!(
            Dialect::MySql.last_insert_accessor(),
            Some("LAST_INSERT_ID()")
        );
        assert_eq!(
            Dialect::Sqlite.last_insert_accessor(),
            Some("last_insert_rowid()")
        );
        assert_eq!(Dialect::Surreal.offset_keyword(), "START");
        assert_eq!(Dialect::Postgres.offset_keyword(), "OFFSET");
    }
}
