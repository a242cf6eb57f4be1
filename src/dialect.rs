use std::fmt;

use time::{PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    error::{Error, Result},
    paginate::Pagination,
    schema::{DEFAULT_TEXT_LENGTH, LogicalType},
    writer::{push_doubled, push_hex, push_quoted},
};

/// Tag carried by connection settings; resolved once into a strategy via
/// [`dialect_for`], never by inspecting types at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectKind {
    SqlServer,
    MySql,
    Postgres,
    Sqlite,
}

pub fn dialect_for(kind: DialectKind) -> &'static dyn Dialect {
    match kind {
        DialectKind::SqlServer => &SqlServer,
        DialectKind::MySql => &MySql,
        DialectKind::Postgres => &Postgres,
        DialectKind::Sqlite => &Sqlite,
    }
}

/// Everything that differs between database families: quoting, literal
/// formats, type keywords, pagination and the CREATE TABLE clauses.
///
/// Implementations are stateless unit structs and safe to share across
/// threads.
pub trait Dialect: fmt::Debug + Send + Sync {
    fn kind(&self) -> DialectKind;

    /// Wrap a bare identifier in the family's bracketing convention. The only
    /// interior escaping is doubling an embedded closing delimiter.
    fn quote_identifier(&self, name: &str) -> String;

    /// Wrap and escape a plain string literal.
    fn quote_value(&self, text: &str) -> String;

    /// Same contract for text outside the printable 7-bit range. Only SQL
    /// Server distinguishes this path (the `N` unicode marker).
    fn quote_extended_value(&self, text: &str) -> String {
        self.quote_value(text)
    }

    /// Binary literal, hex-encoded in the family's native spelling.
    fn quote_blob(&self, bytes: &[u8]) -> String;

    fn bool_literal(&self, value: bool) -> &'static str {
        if value { "1" } else { "0" }
    }

    /// Render an instant as a quoted literal the family accepts, with a fixed
    /// three-digit fractional second.
    fn format_timestamp(&self, instant: PrimitiveDateTime) -> String;

    /// Native column type keyword for a logical type, applying the default
    /// length where the target requires one.
    fn map_logical_type(&self, logical_type: LogicalType, max_length: Option<u32>) -> String;

    /// Offset/limit fragment, including the ORDER BY when one is supplied.
    /// Rejects a zero-row window, and fails with [`Error::MissingOrderBy`] on
    /// families whose pagination syntax is invalid without an ordering.
    fn pagination_clause(&self, page: &Pagination) -> Result<String>;

    /// Full column definition fragment for an integer primary key, replacing
    /// the mapped type. Used only by CREATE TABLE generation.
    fn primary_key_clause(&self, table: &str) -> String;

    /// Table-level suffix appended after the column list when the table has a
    /// generated key (storage engine / seed pragma on MySQL, empty elsewhere).
    fn auto_increment_clause(&self) -> &'static str {
        ""
    }

    fn truncate_statement(&self, table: &str) -> String {
        format!("TRUNCATE TABLE {}", self.quote_identifier(table))
    }

    /// Catalog query returning one row per base table, aliased to
    /// `table_name`.
    fn list_tables_sql(&self, database: &str) -> String;

    /// Catalog query returning one row per column of `table`, aliased to the
    /// uniform shape `column_name, data_type, max_length,
    /// is_nullable | not_null, constraint_name`.
    fn describe_table_sql(&self, table: &str, database: &str) -> String;
}

const TS_24H: &[BorrowedFormatItem<'static>] = format_description!(
    "'[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]'"
);
const TS_12H: &[BorrowedFormatItem<'static>] = format_description!(
    "'[year]-[month]-[day] [hour repr:12]:[minute]:[second].[subsecond digits:3] [period]'"
);

// A window must select at least one row; every strategy checks this
// before rendering so the invariant holds at every entry point.
fn check_window(page: &Pagination) -> Result<()> {
    if page.max_results == 0 {
        return Err(Error::invalid("max_results", "must be positive"));
    }
    Ok(())
}

fn single_quoted(text: &str, doubled: &[char]) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    push_doubled(&mut out, text, doubled);
    out.push('\'');
    out
}

/// The bracket-quoting family (OFFSET/FETCH pagination, `N''` unicode
/// literals, named primary-key constraints).
#[derive(Debug, Clone, Copy)]
pub struct SqlServer;

impl Dialect for SqlServer {
    fn kind(&self) -> DialectKind {
        DialectKind::SqlServer
    }

    fn quote_identifier(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        push_quoted(&mut out, name, '[', ']');
        out
    }

    fn quote_value(&self, text: &str) -> String {
        single_quoted(text, &['\''])
    }

    fn quote_extended_value(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 3);
        out.push('N');
        out.push('\'');
        push_doubled(&mut out, text, &['\'']);
        out.push('\'');
        out
    }

    fn quote_blob(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 2 + 2);
        out.push_str("0x");
        push_hex(&mut out, bytes);
        out
    }

    fn format_timestamp(&self, instant: PrimitiveDateTime) -> String {
        instant.format(TS_12H).expect("static format description")
    }

    fn map_logical_type(&self, logical_type: LogicalType, max_length: Option<u32>) -> String {
        match logical_type {
            LogicalType::Integer => "INT".to_owned(),
            LogicalType::Decimal => "DECIMAL(18,4)".to_owned(),
            LogicalType::Float => "FLOAT".to_owned(),
            LogicalType::Text => {
                format!("NVARCHAR({})", max_length.unwrap_or(DEFAULT_TEXT_LENGTH))
            }
            LogicalType::DateTime => "DATETIME2".to_owned(),
            LogicalType::Boolean => "BIT".to_owned(),
            LogicalType::Blob => "VARBINARY(MAX)".to_owned(),
        }
    }

    fn pagination_clause(&self, page: &Pagination) -> Result<String> {
        check_window(page)?;
        let order_by = page.order_by.as_deref().ok_or(Error::MissingOrderBy)?;
        Ok(format!(
            "ORDER BY {order_by} OFFSET {} ROWS FETCH NEXT {} ROWS ONLY",
            page.index_start, page.max_results
        ))
    }

    fn primary_key_clause(&self, table: &str) -> String {
        let constraint = self.quote_identifier(&format!("PK_{table}"));
        format!("INT NOT NULL CONSTRAINT {constraint} PRIMARY KEY")
    }

    fn list_tables_sql(&self, database: &str) -> String {
        format!(
            "SELECT TABLE_NAME AS table_name FROM INFORMATION_SCHEMA.TABLES \
             WHERE TABLE_TYPE = 'BASE TABLE' AND TABLE_CATALOG = {} \
             ORDER BY TABLE_NAME",
            self.quote_value(database)
        )
    }

    fn describe_table_sql(&self, table: &str, database: &str) -> String {
        format!(
            "SELECT c.COLUMN_NAME AS column_name, c.DATA_TYPE AS data_type, \
             c.CHARACTER_MAXIMUM_LENGTH AS max_length, c.IS_NULLABLE AS is_nullable, \
             k.CONSTRAINT_NAME AS constraint_name \
             FROM INFORMATION_SCHEMA.COLUMNS c \
             LEFT JOIN INFORMATION_SCHEMA.KEY_COLUMN_USAGE k \
             ON k.TABLE_NAME = c.TABLE_NAME AND k.COLUMN_NAME = c.COLUMN_NAME \
             WHERE c.TABLE_CATALOG = {} AND c.TABLE_NAME = {} \
             ORDER BY c.ORDINAL_POSITION",
            self.quote_value(database),
            self.quote_value(table)
        )
    }
}

/// The backtick-quoting family (LIMIT offset,count pagination, backslash
/// escapes in literals, AUTO_INCREMENT plus engine pragma).
#[derive(Debug, Clone, Copy)]
pub struct MySql;

impl Dialect for MySql {
    fn kind(&self) -> DialectKind {
        DialectKind::MySql
    }

    fn quote_identifier(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        push_quoted(&mut out, name, '`', '`');
        out
    }

    fn quote_value(&self, text: &str) -> String {
        // backslash is an escape character here, double it too
        single_quoted(text, &['\'', '\\'])
    }

    fn quote_blob(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 2 + 3);
        out.push_str("X'");
        push_hex(&mut out, bytes);
        out.push('\'');
        out
    }

    fn format_timestamp(&self, instant: PrimitiveDateTime) -> String {
        instant.format(TS_24H).expect("static format description")
    }

    fn map_logical_type(&self, logical_type: LogicalType, max_length: Option<u32>) -> String {
        match logical_type {
            LogicalType::Integer => "INT".to_owned(),
            LogicalType::Decimal => "DECIMAL(18,4)".to_owned(),
            LogicalType::Float => "DOUBLE".to_owned(),
            LogicalType::Text => {
                format!("VARCHAR({})", max_length.unwrap_or(DEFAULT_TEXT_LENGTH))
            }
            LogicalType::DateTime => "DATETIME".to_owned(),
            LogicalType::Boolean => "TINYINT(1)".to_owned(),
            LogicalType::Blob => "BLOB".to_owned(),
        }
    }

    fn pagination_clause(&self, page: &Pagination) -> Result<String> {
        check_window(page)?;
        let window = format!("LIMIT {}, {}", page.index_start, page.max_results);
        Ok(match page.order_by.as_deref() {
            Some(order_by) => format!("ORDER BY {order_by} {window}"),
            None => window,
        })
    }

    fn primary_key_clause(&self, _table: &str) -> String {
        "INT NOT NULL AUTO_INCREMENT PRIMARY KEY".to_owned()
    }

    fn auto_increment_clause(&self) -> &'static str {
        " ENGINE=InnoDB AUTO_INCREMENT=1"
    }

    fn list_tables_sql(&self, database: &str) -> String {
        format!(
            "SELECT TABLE_NAME AS table_name FROM information_schema.TABLES \
             WHERE TABLE_TYPE = 'BASE TABLE' AND TABLE_SCHEMA = {} \
             ORDER BY TABLE_NAME",
            self.quote_value(database)
        )
    }

    fn describe_table_sql(&self, table: &str, database: &str) -> String {
        format!(
            "SELECT c.COLUMN_NAME AS column_name, c.DATA_TYPE AS data_type, \
             c.CHARACTER_MAXIMUM_LENGTH AS max_length, c.IS_NULLABLE AS is_nullable, \
             k.CONSTRAINT_NAME AS constraint_name \
             FROM information_schema.COLUMNS c \
             LEFT JOIN information_schema.KEY_COLUMN_USAGE k \
             ON k.TABLE_SCHEMA = c.TABLE_SCHEMA AND k.TABLE_NAME = c.TABLE_NAME \
             AND k.COLUMN_NAME = c.COLUMN_NAME \
             WHERE c.TABLE_SCHEMA = {} AND c.TABLE_NAME = {} \
             ORDER BY c.ORDINAL_POSITION",
            self.quote_value(database),
            self.quote_value(table)
        )
    }
}

/// The double-quote family (LIMIT/OFFSET pagination, SERIAL keys, bytea hex
/// literals, TRUE/FALSE booleans).
#[derive(Debug, Clone, Copy)]
pub struct Postgres;

impl Dialect for Postgres {
    fn kind(&self) -> DialectKind {
        DialectKind::Postgres
    }

    fn quote_identifier(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        push_quoted(&mut out, name, '"', '"');
        out
    }

    fn quote_value(&self, text: &str) -> String {
        single_quoted(text, &['\''])
    }

    fn quote_blob(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 2 + 4);
        out.push_str("'\\x");
        push_hex(&mut out, bytes);
        out.push('\'');
        out
    }

    fn bool_literal(&self, value: bool) -> &'static str {
        if value { "TRUE" } else { "FALSE" }
    }

    fn format_timestamp(&self, instant: PrimitiveDateTime) -> String {
        instant.format(TS_24H).expect("static format description")
    }

    fn map_logical_type(&self, logical_type: LogicalType, max_length: Option<u32>) -> String {
        match logical_type {
            LogicalType::Integer => "INTEGER".to_owned(),
            LogicalType::Decimal => "NUMERIC(18,4)".to_owned(),
            LogicalType::Float => "DOUBLE PRECISION".to_owned(),
            LogicalType::Text => {
                format!("VARCHAR({})", max_length.unwrap_or(DEFAULT_TEXT_LENGTH))
            }
            LogicalType::DateTime => "TIMESTAMP".to_owned(),
            LogicalType::Boolean => "BOOLEAN".to_owned(),
            LogicalType::Blob => "BYTEA".to_owned(),
        }
    }

    fn pagination_clause(&self, page: &Pagination) -> Result<String> {
        check_window(page)?;
        let window = format!("LIMIT {} OFFSET {}", page.max_results, page.index_start);
        Ok(match page.order_by.as_deref() {
            Some(order_by) => format!("ORDER BY {order_by} {window}"),
            None => window,
        })
    }

    fn primary_key_clause(&self, _table: &str) -> String {
        "SERIAL PRIMARY KEY".to_owned()
    }

    fn list_tables_sql(&self, database: &str) -> String {
        format!(
            "SELECT table_name AS table_name FROM information_schema.tables \
             WHERE table_type = 'BASE TABLE' AND table_schema = 'public' \
             AND table_catalog = {} ORDER BY table_name",
            self.quote_value(database)
        )
    }

    fn describe_table_sql(&self, table: &str, database: &str) -> String {
        // default key constraints here are named <table>_pkey, so the name
        // alone is not a reliable marker; synthesize one from the native
        // constraint type instead.
        format!(
            "SELECT c.column_name AS column_name, c.data_type AS data_type, \
             c.character_maximum_length AS max_length, c.is_nullable AS is_nullable, \
             CASE WHEN tc.constraint_type = 'PRIMARY KEY' THEN 'PK' ELSE NULL END \
             AS constraint_name \
             FROM information_schema.columns c \
             LEFT JOIN information_schema.key_column_usage k \
             ON k.table_name = c.table_name AND k.column_name = c.column_name \
             LEFT JOIN information_schema.table_constraints tc \
             ON tc.constraint_name = k.constraint_name AND tc.table_name = k.table_name \
             WHERE c.table_catalog = {} AND c.table_name = {} \
             ORDER BY c.ordinal_position",
            self.quote_value(database),
            self.quote_value(table)
        )
    }
}

/// The embedded-file family (LIMIT/OFFSET pagination, rowid keys, no
/// TRUNCATE statement, pragma-based catalog).
#[derive(Debug, Clone, Copy)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn kind(&self) -> DialectKind {
        DialectKind::Sqlite
    }

    fn quote_identifier(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        push_quoted(&mut out, name, '"', '"');
        out
    }

    fn quote_value(&self, text: &str) -> String {
        single_quoted(text, &['\''])
    }

    fn quote_blob(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 2 + 3);
        out.push_str("X'");
        push_hex(&mut out, bytes);
        out.push('\'');
        out
    }

    fn format_timestamp(&self, instant: PrimitiveDateTime) -> String {
        instant.format(TS_24H).expect("static format description")
    }

    fn map_logical_type(&self, logical_type: LogicalType, _max_length: Option<u32>) -> String {
        match logical_type {
            LogicalType::Integer => "INTEGER".to_owned(),
            LogicalType::Decimal => "NUMERIC".to_owned(),
            LogicalType::Float => "REAL".to_owned(),
            LogicalType::Text => "TEXT".to_owned(),
            LogicalType::DateTime => "TEXT".to_owned(),
            LogicalType::Boolean => "INTEGER".to_owned(),
            LogicalType::Blob => "BLOB".to_owned(),
        }
    }

    fn pagination_clause(&self, page: &Pagination) -> Result<String> {
        check_window(page)?;
        let window = format!("LIMIT {} OFFSET {}", page.max_results, page.index_start);
        Ok(match page.order_by.as_deref() {
            Some(order_by) => format!("ORDER BY {order_by} {window}"),
            None => window,
        })
    }

    fn primary_key_clause(&self, _table: &str) -> String {
        "INTEGER PRIMARY KEY AUTOINCREMENT".to_owned()
    }

    fn truncate_statement(&self, table: &str) -> String {
        // no TRUNCATE statement in this family
        format!("DELETE FROM {}", self.quote_identifier(table))
    }

    fn list_tables_sql(&self, _database: &str) -> String {
        "SELECT name AS table_name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name"
            .to_owned()
    }

    fn describe_table_sql(&self, table: &str, _database: &str) -> String {
        // pragma_table_info exposes a raw not-null flag instead of the
        // is_nullable complement; the introspector negates it.
        format!(
            "SELECT name AS column_name, type AS data_type, NULL AS max_length, \
             \"notnull\" AS not_null, CASE pk WHEN 0 THEN NULL ELSE 'PK' END AS constraint_name \
             FROM pragma_table_info({})",
            self.quote_value(table)
        )
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::tests::ALL_DIALECTS;

    #[test]
    fn test_quote_identifier_per_dialect() {
        assert_eq!("[users]", SqlServer.quote_identifier("users"));
        assert_eq!("`users`", MySql.quote_identifier("users"));
        assert_eq!("\"users\"", Postgres.quote_identifier("users"));
        assert_eq!("\"users\"", Sqlite.quote_identifier("users"));
    }

    #[test]
    fn test_quote_identifier_doubles_delimiter() {
        assert_eq!("[us]]ers]", SqlServer.quote_identifier("us]ers"));
        assert_eq!("`us``ers`", MySql.quote_identifier("us`ers"));
        assert_eq!("\"us\"\"ers\"", Postgres.quote_identifier("us\"ers"));
    }

    #[test]
    fn test_quote_identifier_deterministic() {
        for dialect in ALL_DIALECTS {
            let first = dialect.quote_identifier("we[i]rd\"name`");
            let second = dialect.quote_identifier("we[i]rd\"name`");
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_quote_value_embedded_quote_stays_inert() {
        for dialect in ALL_DIALECTS {
            let quoted = dialect.quote_value("O'Brien");
            assert!(quoted.contains("O''Brien"), "{quoted}");
        }
    }

    #[test]
    fn test_quote_value_injection_payload() {
        let payload = "\"); DROP TABLE x; --";
        for dialect in ALL_DIALECTS {
            let quoted = dialect.quote_value(payload);
            // the only unescaped single quotes are the outer delimiters
            let singles = quoted.matches('\'').count();
            assert_eq!(0, singles % 2, "{quoted}");
            assert!(quoted.starts_with('\'') || quoted.starts_with("N'"));
            assert!(quoted.ends_with('\''));
        }
    }

    #[test]
    fn test_mysql_backslash_escape() {
        assert_eq!(r"'c:\\temp'", MySql.quote_value(r"c:\temp"));
        assert_eq!(r"'\\'' OR 1=1 --'", MySql.quote_value(r"\' OR 1=1 --"));
    }

    #[test]
    fn test_extended_value_marker() {
        assert_eq!("N'héllo'", SqlServer.quote_extended_value("héllo"));
        // the other families reuse the plain path
        assert_eq!("'héllo'", MySql.quote_extended_value("héllo"));
        assert_eq!("'héllo'", Postgres.quote_extended_value("héllo"));
        assert_eq!("'héllo'", Sqlite.quote_extended_value("héllo"));
    }

    #[test]
    fn test_quote_blob() {
        let bytes: &[u8] = &[0xDE, 0xAD, 0xBE, 0xEF];
        assert_eq!("0xDEADBEEF", SqlServer.quote_blob(bytes));
        assert_eq!("X'DEADBEEF'", MySql.quote_blob(bytes));
        assert_eq!("'\\xDEADBEEF'", Postgres.quote_blob(bytes));
        assert_eq!("X'DEADBEEF'", Sqlite.quote_blob(bytes));
    }

    #[test]
    fn test_format_timestamp() {
        let afternoon = datetime!(2024-03-05 14:30:09.120);
        assert_eq!(
            "'2024-03-05 02:30:09.120 PM'",
            SqlServer.format_timestamp(afternoon)
        );
        assert_eq!(
            "'2024-03-05 14:30:09.120'",
            MySql.format_timestamp(afternoon)
        );
        assert_eq!(
            "'2024-03-05 14:30:09.120'",
            Postgres.format_timestamp(afternoon)
        );
        let morning = datetime!(2024-03-05 00:30:09.0);
        assert_eq!(
            "'2024-03-05 12:30:09.000 AM'",
            SqlServer.format_timestamp(morning)
        );
    }

    #[test]
    fn test_map_logical_type() {
        assert_eq!("NVARCHAR(255)", SqlServer.map_logical_type(LogicalType::Text, None));
        assert_eq!("NVARCHAR(40)", SqlServer.map_logical_type(LogicalType::Text, Some(40)));
        assert_eq!("VARCHAR(40)", MySql.map_logical_type(LogicalType::Text, Some(40)));
        assert_eq!("VARCHAR(255)", Postgres.map_logical_type(LogicalType::Text, None));
        // length is meaningless on the embedded family
        assert_eq!("TEXT", Sqlite.map_logical_type(LogicalType::Text, Some(40)));
        assert_eq!("VARBINARY(MAX)", SqlServer.map_logical_type(LogicalType::Blob, None));
        assert_eq!("TINYINT(1)", MySql.map_logical_type(LogicalType::Boolean, None));
        assert_eq!("DOUBLE PRECISION", Postgres.map_logical_type(LogicalType::Float, None));
    }

    #[test]
    fn test_pagination_mandatory_order_by() {
        let page = Pagination::new(5, 10).order_by("name ASC");
        assert_eq!(
            "ORDER BY name ASC OFFSET 5 ROWS FETCH NEXT 10 ROWS ONLY",
            SqlServer.pagination_clause(&page).unwrap()
        );
        let bare = Pagination::new(5, 10);
        assert!(matches!(
            SqlServer.pagination_clause(&bare),
            Err(Error::MissingOrderBy)
        ));
    }

    #[test]
    fn test_pagination_optional_order_by() {
        let page = Pagination::new(5, 10).order_by("id DESC");
        assert_eq!("ORDER BY id DESC LIMIT 5, 10", MySql.pagination_clause(&page).unwrap());
        assert_eq!(
            "ORDER BY id DESC LIMIT 10 OFFSET 5",
            Postgres.pagination_clause(&page).unwrap()
        );
        let bare = Pagination::new(5, 10);
        assert_eq!("LIMIT 5, 10", MySql.pagination_clause(&bare).unwrap());
        assert_eq!("LIMIT 10 OFFSET 5", Sqlite.pagination_clause(&bare).unwrap());
    }

    #[test]
    fn test_pagination_rejects_zero_window() {
        let page = Pagination::new(0, 0).order_by("id");
        for dialect in ALL_DIALECTS {
            assert!(matches!(
                dialect.pagination_clause(&page),
                Err(Error::InvalidArgument { param: "max_results", .. })
            ));
        }
    }

    #[test]
    fn test_primary_key_clause() {
        assert_eq!(
            "INT NOT NULL CONSTRAINT [PK_users] PRIMARY KEY",
            SqlServer.primary_key_clause("users")
        );
        assert_eq!(
            "INT NOT NULL AUTO_INCREMENT PRIMARY KEY",
            MySql.primary_key_clause("users")
        );
        assert_eq!("SERIAL PRIMARY KEY", Postgres.primary_key_clause("users"));
        assert_eq!(
            "INTEGER PRIMARY KEY AUTOINCREMENT",
            Sqlite.primary_key_clause("users")
        );
    }

    #[test]
    fn test_truncate_statement() {
        assert_eq!("TRUNCATE TABLE [logs]", SqlServer.truncate_statement("logs"));
        assert_eq!("DELETE FROM \"logs\"", Sqlite.truncate_statement("logs"));
    }

    #[test]
    fn test_catalog_sql_sanitizes_names() {
        let sql = Postgres.describe_table_sql("users'; --", "app");
        assert!(sql.contains("'users''; --'"), "{sql}");
        let sql = SqlServer.list_tables_sql("app's db");
        assert!(sql.contains("'app''s db'"), "{sql}");
    }
}
