use smol_str::SmolStr;

/// Applied when a bounded text type is created without an explicit length.
pub const DEFAULT_TEXT_LENGTH: u32 = 255;

/// The dialect-independent column domain. Each dialect maps these to its own
/// native keywords and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalType {
    Integer,
    Decimal,
    Float,
    Text,
    DateTime,
    Boolean,
    Blob,
}

impl LogicalType {
    /// Reverse mapping from a native type keyword as reported by a catalog
    /// query. The argument may carry a length suffix (`varchar(40)`); only
    /// the base keyword is considered. Unknown keywords fall back to `Text`.
    pub fn from_native(native: &str) -> Self {
        let base = native.split('(').next().unwrap_or(native).trim();
        match base.to_ascii_lowercase().as_str() {
            "int" | "integer" | "bigint" | "smallint" | "mediumint" => Self::Integer,
            "decimal" | "numeric" | "money" => Self::Decimal,
            "float" | "double" | "double precision" | "real" => Self::Float,
            "bit" | "boolean" | "bool" | "tinyint" => Self::Boolean,
            "datetime" | "datetime2" | "smalldatetime" | "timestamp"
            | "timestamp without time zone" | "timestamp with time zone" | "date" => Self::DateTime,
            "blob" | "mediumblob" | "longblob" | "varbinary" | "binary" | "bytea" | "image" => {
                Self::Blob
            }
            _ => Self::Text,
        }
    }
}

/// Normalized schema metadata for one table column, produced transiently from
/// introspection rows and consumed by `create_table_query`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: SmolStr,
    pub logical_type: LogicalType,
    pub max_length: Option<u32>,
    pub nullable: bool,
    pub primary_key: bool,
}

impl Column {
    pub fn new(name: impl Into<SmolStr>, logical_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            logical_type,
            max_length: None,
            nullable: true,
            primary_key: false,
        }
    }

    pub fn max_length(mut self, length: u32) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_native_keywords() {
        assert_eq!(LogicalType::Integer, LogicalType::from_native("int"));
        assert_eq!(LogicalType::Integer, LogicalType::from_native("INTEGER"));
        assert_eq!(LogicalType::Text, LogicalType::from_native("nvarchar"));
        assert_eq!(LogicalType::Text, LogicalType::from_native("varchar(40)"));
        assert_eq!(LogicalType::Decimal, LogicalType::from_native("numeric"));
        assert_eq!(LogicalType::Float, LogicalType::from_native("double precision"));
        assert_eq!(LogicalType::DateTime, LogicalType::from_native("datetime2"));
        assert_eq!(LogicalType::Boolean, LogicalType::from_native("tinyint"));
        assert_eq!(LogicalType::Blob, LogicalType::from_native("bytea"));
        // unknown keywords degrade to text
        assert_eq!(LogicalType::Text, LogicalType::from_native("jsonb"));
    }

    #[test]
    fn test_column_builders() {
        let column = Column::new("id", LogicalType::Integer).primary_key();
        assert!(column.primary_key);
        assert!(!column.nullable);
        let column = Column::new("name", LogicalType::Text).max_length(80);
        assert_eq!(Some(80), column.max_length);
        assert!(column.nullable);
    }
}
