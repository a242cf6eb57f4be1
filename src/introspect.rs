use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::{
    dialect::{Dialect, DialectKind, dialect_for},
    error::{Error, Result},
    schema::{Column, LogicalType},
    settings::ConnectSettings,
    value::Value,
};

/// One result row from the executor: column name to typed scalar, in
/// result-set order.
pub type Row = IndexMap<SmolStr, Value>;

/// The external collaborator that runs a finished statement against a live
/// connection. The engine itself never opens a socket; failures from here
/// propagate unchanged.
pub trait Executor {
    fn execute(&mut self, sql: &str) -> Result<Vec<Row>>;
}

/// Reserved constraint-name prefix treated as a primary-key marker.
///
/// This is a carried-forward heuristic, not a guarantee: it is brittle
/// against schemas with differently named key constraints. The catalog
/// queries join native key metadata where the dialect exposes it — the
/// Postgres and Sqlite queries synthesize the `PK` marker from constraint
/// type, MySQL reports the literal name `PRIMARY` — so the name rule is the
/// fallback, matching the prefix, `PRIMARY`, and the stock `<table>_pkey`
/// convention.
pub const PRIMARY_KEY_PREFIX: &str = "PK";

fn is_primary_key_name(constraint: &str) -> bool {
    constraint.starts_with(PRIMARY_KEY_PREFIX)
        || constraint.eq_ignore_ascii_case("PRIMARY")
        || constraint.ends_with("_pkey")
}

fn row_text<'a>(row: &'a Row, key: &str) -> Option<&'a str> {
    row.get(key).and_then(Value::as_str)
}

fn row_int(row: &Row, key: &str) -> Option<i64> {
    row.get(key).and_then(Value::as_int)
}

/// Normalizes a dialect's catalog rows into [`Column`] records.
pub struct Introspector<E> {
    dialect: &'static dyn Dialect,
    database: SmolStr,
    executor: E,
}

impl<E> Introspector<E>
where
    E: Executor,
{
    pub fn new(kind: DialectKind, database: impl Into<SmolStr>, executor: E) -> Self {
        Self {
            dialect: dialect_for(kind),
            database: database.into(),
            executor,
        }
    }

    pub fn from_settings(settings: &ConnectSettings, executor: E) -> Self {
        Self::new(settings.dialect, settings.database.clone(), executor)
    }

    pub fn list_tables(&mut self) -> Result<Vec<SmolStr>> {
        let sql = self.dialect.list_tables_sql(&self.database);
        debug!(sql = %sql, "listing tables");
        let rows = self.executor.execute(&sql)?;
        Ok(rows
            .iter()
            .filter_map(|row| row_text(row, "table_name").map(SmolStr::new))
            .collect())
    }

    /// One record per column of `name`. Constraint joins can fan a column out
    /// over several rows; the first occurrence wins.
    pub fn describe_table(&mut self, name: &str) -> Result<Vec<Column>> {
        if name.trim().is_empty() {
            return Err(Error::invalid("name", "must not be empty"));
        }
        let sql = self.dialect.describe_table_sql(name, &self.database);
        debug!(sql = %sql, table = name, "describing table");
        let rows = self.executor.execute(&sql)?;

        let mut columns: IndexMap<SmolStr, Column> = IndexMap::new();
        for row in &rows {
            let Some(column_name) = row_text(row, "column_name") else {
                continue;
            };
            if columns.contains_key(column_name) {
                continue;
            }

            let native = row_text(row, "data_type").unwrap_or_default();
            let max_length = row_int(row, "max_length")
                .and_then(|length| u32::try_from(length).ok())
                .filter(|length| *length > 0);
            // the pragma shape exposes the complement of is_nullable
            let nullable = if let Some(flag) = row_int(row, "not_null") {
                flag == 0
            } else if let Some(text) = row_text(row, "is_nullable") {
                text.eq_ignore_ascii_case("YES")
            } else {
                true
            };
            let primary_key =
                row_text(row, "constraint_name").is_some_and(is_primary_key_name);

            columns.insert(
                SmolStr::new(column_name),
                Column {
                    name: SmolStr::new(column_name),
                    logical_type: LogicalType::from_native(native),
                    max_length,
                    nullable,
                    primary_key,
                },
            );
        }
        Ok(columns.into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeExecutor {
        rows: Vec<Row>,
        seen: Vec<String>,
    }

    impl Executor for FakeExecutor {
        fn execute(&mut self, sql: &str) -> Result<Vec<Row>> {
            self.seen.push(sql.to_owned());
            Ok(self.rows.clone())
        }
    }

    struct FailingExecutor;

    impl Executor for FailingExecutor {
        fn execute(&mut self, _sql: &str) -> Result<Vec<Row>> {
            Err(Error::execution(std::io::Error::other("connection lost")))
        }
    }

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(key, value)| (SmolStr::new(key), value.clone()))
            .collect()
    }

    fn text(value: &str) -> Value {
        Value::Text(SmolStr::new(value))
    }

    #[test]
    fn test_list_tables() {
        let executor = FakeExecutor {
            rows: vec![
                row(&[("table_name", text("orders"))]),
                row(&[("table_name", text("users"))]),
            ],
            ..Default::default()
        };
        let mut introspector = Introspector::new(DialectKind::Postgres, "app", executor);
        let tables = introspector.list_tables().unwrap();
        assert_eq!(vec![SmolStr::new("orders"), SmolStr::new("users")], tables);
        assert!(introspector.executor.seen[0].contains("information_schema.tables"));
    }

    #[test]
    fn test_describe_table_normalizes() {
        let executor = FakeExecutor {
            rows: vec![
                row(&[
                    ("column_name", text("id")),
                    ("data_type", text("integer")),
                    ("max_length", Value::Null),
                    ("is_nullable", text("NO")),
                    ("constraint_name", text("PK_users")),
                ]),
                row(&[
                    ("column_name", text("name")),
                    ("data_type", text("varchar")),
                    ("max_length", Value::Int(80)),
                    ("is_nullable", text("YES")),
                    ("constraint_name", Value::Null),
                ]),
            ],
            ..Default::default()
        };
        let mut introspector = Introspector::new(DialectKind::Postgres, "app", executor);
        let columns = introspector.describe_table("users").unwrap();

        assert_eq!(2, columns.len());
        assert_eq!("id", columns[0].name);
        assert_eq!(LogicalType::Integer, columns[0].logical_type);
        assert!(columns[0].primary_key);
        assert!(!columns[0].nullable);
        assert_eq!("name", columns[1].name);
        assert_eq!(LogicalType::Text, columns[1].logical_type);
        assert_eq!(Some(80), columns[1].max_length);
        assert!(columns[1].nullable);
        assert!(!columns[1].primary_key);
    }

    #[test]
    fn test_describe_table_stock_postgres_key_name() {
        // executors unaware of the CASE synthesis may hand back the raw
        // default constraint name; the fallback name rule must still mark it
        let executor = FakeExecutor {
            rows: vec![row(&[
                ("column_name", text("id")),
                ("data_type", text("integer")),
                ("is_nullable", text("NO")),
                ("constraint_name", text("users_pkey")),
            ])],
            ..Default::default()
        };
        let mut introspector = Introspector::new(DialectKind::Postgres, "app", executor);
        let columns = introspector.describe_table("users").unwrap();
        assert!(columns[0].primary_key);
        // the issued query derives the marker from native constraint type
        assert!(introspector.executor.seen[0].contains("table_constraints"));
        assert!(
            introspector.executor.seen[0]
                .contains("CASE WHEN tc.constraint_type = 'PRIMARY KEY' THEN 'PK'")
        );
    }

    #[test]
    fn test_describe_table_dedups_join_fanout() {
        // a second constraint row for the same column must not shadow the first
        let executor = FakeExecutor {
            rows: vec![
                row(&[
                    ("column_name", text("id")),
                    ("data_type", text("integer")),
                    ("is_nullable", text("NO")),
                    ("constraint_name", text("PK_users")),
                ]),
                row(&[
                    ("column_name", text("id")),
                    ("data_type", text("integer")),
                    ("is_nullable", text("NO")),
                    ("constraint_name", text("UQ_users_id")),
                ]),
            ],
            ..Default::default()
        };
        let mut introspector = Introspector::new(DialectKind::SqlServer, "app", executor);
        let columns = introspector.describe_table("users").unwrap();
        assert_eq!(1, columns.len());
        assert!(columns[0].primary_key);
    }

    #[test]
    fn test_describe_table_negated_nullability() {
        // pragma shape: raw not-null flag plus a PK marker
        let executor = FakeExecutor {
            rows: vec![
                row(&[
                    ("column_name", text("id")),
                    ("data_type", text("INTEGER")),
                    ("not_null", Value::Int(1)),
                    ("constraint_name", text("PK")),
                ]),
                row(&[
                    ("column_name", text("note")),
                    ("data_type", text("TEXT")),
                    ("not_null", Value::Int(0)),
                    ("constraint_name", Value::Null),
                ]),
            ],
            ..Default::default()
        };
        let mut introspector = Introspector::new(DialectKind::Sqlite, "ignored", executor);
        let columns = introspector.describe_table("notes").unwrap();
        assert!(!columns[0].nullable);
        assert!(columns[0].primary_key);
        assert!(columns[1].nullable);
        assert!(!columns[1].primary_key);
    }

    #[test]
    fn test_describe_table_rejects_empty_name() {
        let mut introspector =
            Introspector::new(DialectKind::Postgres, "app", FakeExecutor::default());
        assert!(matches!(
            introspector.describe_table(""),
            Err(Error::InvalidArgument { param: "name", .. })
        ));
        // nothing was sent to the executor
        assert!(introspector.executor.seen.is_empty());
    }

    #[test]
    fn test_executor_failure_propagates() {
        let mut introspector = Introspector::new(DialectKind::MySql, "app", FailingExecutor);
        assert!(matches!(
            introspector.list_tables(),
            Err(Error::Execution(_))
        ));
    }

    #[test]
    fn test_primary_key_name_rule() {
        assert!(is_primary_key_name("PK_users"));
        assert!(is_primary_key_name("PK"));
        assert!(is_primary_key_name("PRIMARY"));
        assert!(is_primary_key_name("users_pkey"));
        assert!(!is_primary_key_name("FK_users_roles"));
        assert!(!is_primary_key_name("pk_users"));
        assert!(!is_primary_key_name("users_pkey_old"));
    }
}
