use smol_str::{SmolStr, format_smolstr};

use crate::{
    dialect::Dialect,
    error::{Error, Result},
    operator::Operator,
    value::{IntoValue, Value},
    writer::SqlWriter,
};

/// Right-hand side of a leaf condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Null tests take no operand.
    None,
    Value(Value),
    /// Membership tests take an ordered, non-empty list.
    List(Vec<Value>),
    Range(Value, Value),
}

/// A filter tree: either a single condition against a column, or a boolean
/// combination of two subtrees. Compilation pattern-matches the two shapes
/// exhaustively; the structural invariants (a compound carries And/Or, a leaf
/// anything else, operand shape agrees with the operator) are rechecked at
/// compile time so a hand-built tree cannot slip through.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Leaf {
        column: SmolStr,
        op: Operator,
        operand: Operand,
    },
    Compound {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },
}

impl Expr {
    fn leaf(column: impl Into<SmolStr>, op: Operator, operand: Operand) -> Self {
        Self::Leaf {
            column: column.into(),
            op,
            operand,
        }
    }

    pub fn eq(column: impl Into<SmolStr>, value: impl IntoValue) -> Self {
        Self::leaf(column, Operator::Eq, Operand::Value(value.into_value()))
    }

    pub fn not_eq(column: impl Into<SmolStr>, value: impl IntoValue) -> Self {
        Self::leaf(column, Operator::NotEq, Operand::Value(value.into_value()))
    }

    pub fn gt(column: impl Into<SmolStr>, value: impl IntoValue) -> Self {
        Self::leaf(column, Operator::Gt, Operand::Value(value.into_value()))
    }

    pub fn gte(column: impl Into<SmolStr>, value: impl IntoValue) -> Self {
        Self::leaf(column, Operator::Gte, Operand::Value(value.into_value()))
    }

    pub fn lt(column: impl Into<SmolStr>, value: impl IntoValue) -> Self {
        Self::leaf(column, Operator::Lt, Operand::Value(value.into_value()))
    }

    pub fn lte(column: impl Into<SmolStr>, value: impl IntoValue) -> Self {
        Self::leaf(column, Operator::Lte, Operand::Value(value.into_value()))
    }

    pub fn is_null(column: impl Into<SmolStr>) -> Self {
        Self::leaf(column, Operator::IsNull, Operand::None)
    }

    pub fn is_not_null(column: impl Into<SmolStr>) -> Self {
        Self::leaf(column, Operator::IsNotNull, Operand::None)
    }

    pub fn in_list<I, V>(column: impl Into<SmolStr>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: IntoValue,
    {
        let values = values.into_iter().map(IntoValue::into_value).collect();
        Self::leaf(column, Operator::In, Operand::List(values))
    }

    pub fn not_in<I, V>(column: impl Into<SmolStr>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: IntoValue,
    {
        let values = values.into_iter().map(IntoValue::into_value).collect();
        Self::leaf(column, Operator::NotIn, Operand::List(values))
    }

    pub fn contains(column: impl Into<SmolStr>, needle: impl Into<SmolStr>) -> Self {
        Self::leaf(
            column,
            Operator::Contains,
            Operand::Value(Value::Text(needle.into())),
        )
    }

    pub fn starts_with(column: impl Into<SmolStr>, needle: impl Into<SmolStr>) -> Self {
        Self::leaf(
            column,
            Operator::StartsWith,
            Operand::Value(Value::Text(needle.into())),
        )
    }

    pub fn ends_with(column: impl Into<SmolStr>, needle: impl Into<SmolStr>) -> Self {
        Self::leaf(
            column,
            Operator::EndsWith,
            Operand::Value(Value::Text(needle.into())),
        )
    }

    pub fn between(column: impl Into<SmolStr>, low: impl IntoValue, high: impl IntoValue) -> Self {
        Self::leaf(
            column,
            Operator::Between,
            Operand::Range(low.into_value(), high.into_value()),
        )
    }

    pub fn and(self, other: Expr) -> Self {
        Self::Compound {
            left: Box::new(self),
            op: Operator::And,
            right: Box::new(other),
        }
    }

    pub fn or(self, other: Expr) -> Self {
        Self::Compound {
            left: Box::new(self),
            op: Operator::Or,
            right: Box::new(other),
        }
    }

    /// Compile the tree into a WHERE-clause fragment for `dialect`. Pure:
    /// the same tree and dialect always produce the same string.
    pub fn compile(&self, dialect: &dyn Dialect) -> Result<String> {
        let mut writer = SqlWriter::new(dialect);
        self.write_sql(&mut writer)?;
        Ok(writer.finish())
    }

    pub(crate) fn write_sql(&self, writer: &mut SqlWriter<'_>) -> Result<()> {
        match self {
            Expr::Leaf {
                column,
                op,
                operand,
            } => write_leaf(writer, column, *op, operand),
            Expr::Compound { left, op, right } => {
                if !op.is_conjunction() {
                    return Err(Error::MalformedExpression(format!(
                        "compound node requires AND/OR, found {:?}",
                        op
                    )));
                }
                // each side parenthesized, so precedence never depends on depth
                writer.push("(");
                left.write_sql(writer)?;
                writer.push(") ");
                writer.push(op.sql());
                writer.push(" (");
                right.write_sql(writer)?;
                writer.push(")");
                Ok(())
            }
        }
    }
}

fn write_leaf(
    writer: &mut SqlWriter<'_>,
    column: &str,
    op: Operator,
    operand: &Operand,
) -> Result<()> {
    if op.is_conjunction() {
        return Err(Error::MalformedExpression(format!(
            "conjunction {:?} is not valid on a leaf condition",
            op
        )));
    }

    writer.push_ident(column);
    writer.push(" ");
    writer.push(op.sql());

    match (op, operand) {
        (Operator::IsNull | Operator::IsNotNull, Operand::None) => Ok(()),
        (Operator::IsNull | Operator::IsNotNull, _) => Err(Error::MalformedExpression(
            format!("null test on `{column}` takes no operand"),
        )),
        (Operator::In | Operator::NotIn, Operand::List(values)) => {
            if values.is_empty() {
                return Err(Error::MalformedExpression(format!(
                    "membership test on `{column}` requires a non-empty list"
                )));
            }
            writer.push(" (");
            for (index, value) in values.iter().enumerate() {
                if index > 0 {
                    writer.push(", ");
                }
                writer.push_value(value)?;
            }
            writer.push(")");
            Ok(())
        }
        (Operator::In | Operator::NotIn, _) => Err(Error::MalformedExpression(format!(
            "membership test on `{column}` requires a list operand"
        ))),
        (Operator::Between, Operand::Range(low, high)) => {
            writer.push(" ");
            writer.push_value(low)?;
            writer.push(" AND ");
            writer.push_value(high)?;
            Ok(())
        }
        (Operator::Between, _) => Err(Error::MalformedExpression(format!(
            "range test on `{column}` requires a low/high pair"
        ))),
        (
            Operator::Contains | Operator::StartsWith | Operator::EndsWith,
            Operand::Value(Value::Text(needle)),
        ) => {
            let pattern = match op {
                Operator::Contains => format_smolstr!("%{needle}%"),
                Operator::StartsWith => format_smolstr!("{needle}%"),
                _ => format_smolstr!("%{needle}"),
            };
            writer.push(" ");
            // the whole pattern is sanitized as one literal
            writer.push_value(&Value::Text(pattern))?;
            Ok(())
        }
        (Operator::Contains | Operator::StartsWith | Operator::EndsWith, _) => {
            Err(Error::MalformedExpression(format!(
                "substring test on `{column}` requires a text operand"
            )))
        }
        (_, Operand::Value(value)) => {
            writer.push(" ");
            writer.push_value(value)?;
            Ok(())
        }
        (_, _) => Err(Error::MalformedExpression(format!(
            "comparison on `{column}` requires a single scalar operand"
        ))),
    }
}
