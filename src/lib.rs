mod builder;
mod dialect;
mod error;
mod expr;
mod introspect;
mod operator;
mod paginate;
mod schema;
mod settings;
mod value;
mod writer;

pub use builder::ValueMap;
pub use builder::create_table_query;
pub use builder::delete_query;
pub use builder::drop_table_query;
pub use builder::insert_query;
pub use builder::select_query;
pub use builder::truncate_query;
pub use builder::update_query;

pub use dialect::Dialect;
pub use dialect::DialectKind;
pub use dialect::MySql;
pub use dialect::Postgres;
pub use dialect::SqlServer;
pub use dialect::Sqlite;
pub use dialect::dialect_for;

pub use error::Error;
pub use error::Result;

pub use expr::Expr;
pub use expr::Operand;
pub use operator::Operator;
pub use paginate::Pagination;

pub use schema::Column;
pub use schema::DEFAULT_TEXT_LENGTH;
pub use schema::LogicalType;

pub use introspect::Executor;
pub use introspect::Introspector;
pub use introspect::PRIMARY_KEY_PREFIX;
pub use introspect::Row;

pub use settings::ConnectSettings;
pub use value::IntoValue;
pub use value::Value;
