use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::{
    dialect::Dialect,
    error::{Error, Result},
    expr::Expr,
    paginate::Pagination,
    schema::Column,
    writer::SqlWriter,
};

/// Ordered column-to-value collection for INSERT/UPDATE; insertion order is
/// emission order.
pub type ValueMap = IndexMap<SmolStr, crate::value::Value>;

fn check_table(table: &str) -> Result<()> {
    if table.trim().is_empty() {
        return Err(Error::invalid("table", "must not be empty"));
    }
    Ok(())
}

fn check_values(values: &ValueMap) -> Result<()> {
    if values.is_empty() {
        return Err(Error::invalid("values", "must contain at least one column"));
    }
    if values.keys().any(|key| key.trim().is_empty()) {
        return Err(Error::invalid("values", "column names must not be empty"));
    }
    Ok(())
}

/// `SELECT <cols|*> FROM <table> [WHERE <filter>] [<pagination>]`.
/// An empty column list selects `*`.
pub fn select_query(
    dialect: &dyn Dialect,
    table: &str,
    columns: &[&str],
    filter: Option<&Expr>,
    page: Option<&Pagination>,
) -> Result<String> {
    check_table(table)?;

    let mut writer = SqlWriter::new(dialect);
    writer.push("SELECT ");
    if columns.is_empty() {
        writer.push("*");
    } else {
        for (index, column) in columns.iter().enumerate() {
            if index > 0 {
                writer.push(", ");
            }
            writer.push_ident(column);
        }
    }
    writer.push(" FROM ");
    writer.push_ident(table);

    if let Some(filter) = filter {
        writer.push(" WHERE ");
        filter.write_sql(&mut writer)?;
    }

    if let Some(page) = page {
        let clause = dialect.pagination_clause(page)?;
        writer.push(" ");
        writer.push(&clause);
    }

    Ok(writer.finish())
}

/// `INSERT INTO <table> (<cols>) VALUES (<literals>)` in key-insertion order.
pub fn insert_query(dialect: &dyn Dialect, table: &str, values: &ValueMap) -> Result<String> {
    check_table(table)?;
    check_values(values)?;

    let mut writer = SqlWriter::new(dialect);
    writer.push("INSERT INTO ");
    writer.push_ident(table);
    writer.push(" (");
    for (index, column) in values.keys().enumerate() {
        if index > 0 {
            writer.push(", ");
        }
        writer.push_ident(column);
    }
    writer.push(") VALUES (");
    for (index, value) in values.values().enumerate() {
        if index > 0 {
            writer.push(", ");
        }
        writer.push_value(value)?;
    }
    writer.push(")");
    Ok(writer.finish())
}

/// `UPDATE <table> SET col = literal, ... [WHERE <filter>]`. The filter is
/// optional here; an unfiltered update is a legitimate bulk assignment.
pub fn update_query(
    dialect: &dyn Dialect,
    table: &str,
    values: &ValueMap,
    filter: Option<&Expr>,
) -> Result<String> {
    check_table(table)?;
    check_values(values)?;

    let mut writer = SqlWriter::new(dialect);
    writer.push("UPDATE ");
    writer.push_ident(table);
    writer.push(" SET ");
    for (index, (column, value)) in values.iter().enumerate() {
        if index > 0 {
            writer.push(", ");
        }
        writer.push_ident(column);
        writer.push(" = ");
        writer.push_value(value)?;
    }
    if let Some(filter) = filter {
        writer.push(" WHERE ");
        filter.write_sql(&mut writer)?;
    }
    Ok(writer.finish())
}

/// `DELETE FROM <table> WHERE <filter>`. The filter is mandatory; refusing a
/// bare delete guards against unconditional data loss.
pub fn delete_query(dialect: &dyn Dialect, table: &str, filter: Option<&Expr>) -> Result<String> {
    check_table(table)?;
    let Some(filter) = filter else {
        return Err(Error::invalid("filter", "delete requires a filter"));
    };

    let mut writer = SqlWriter::new(dialect);
    writer.push("DELETE FROM ");
    writer.push_ident(table);
    writer.push(" WHERE ");
    filter.write_sql(&mut writer)?;
    Ok(writer.finish())
}

/// `CREATE TABLE <table> (<definitions>)`. Primary-key columns take the
/// dialect's key clause in place of the mapped type; a generated key pulls in
/// the dialect's table-level auto-increment suffix.
pub fn create_table_query(dialect: &dyn Dialect, table: &str, columns: &[Column]) -> Result<String> {
    check_table(table)?;
    if columns.is_empty() {
        return Err(Error::invalid("columns", "must contain at least one column"));
    }
    if columns.iter().any(|column| column.name.trim().is_empty()) {
        return Err(Error::invalid("columns", "column names must not be empty"));
    }

    let mut writer = SqlWriter::new(dialect);
    writer.push("CREATE TABLE ");
    writer.push_ident(table);
    writer.push(" (");
    let mut has_key = false;
    for (index, column) in columns.iter().enumerate() {
        if index > 0 {
            writer.push(", ");
        }
        writer.push_ident(&column.name);
        writer.push(" ");
        if column.primary_key {
            has_key = true;
            let clause = dialect.primary_key_clause(table);
            writer.push(&clause);
        } else {
            let native = dialect.map_logical_type(column.logical_type, column.max_length);
            writer.push(&native);
            if !column.nullable {
                writer.push(" NOT NULL");
            }
        }
    }
    writer.push(")");
    if has_key {
        writer.push(dialect.auto_increment_clause());
    }
    Ok(writer.finish())
}

pub fn drop_table_query(dialect: &dyn Dialect, table: &str) -> Result<String> {
    check_table(table)?;
    let mut writer = SqlWriter::new(dialect);
    writer.push("DROP TABLE ");
    writer.push_ident(table);
    Ok(writer.finish())
}

pub fn truncate_query(dialect: &dyn Dialect, table: &str) -> Result<String> {
    check_table(table)?;
    Ok(dialect.truncate_statement(table))
}
