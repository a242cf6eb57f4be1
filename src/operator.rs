/// The closed operator catalog. Comparison and membership operators appear on
/// leaf expressions; `And`/`Or` are reserved for compound nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
    IsNull,
    IsNotNull,
    In,
    NotIn,
    Contains,
    StartsWith,
    EndsWith,
    And,
    Or,
    Between,
}

impl Operator {
    /// Keyword rendering. The substring operators all compile to LIKE; the
    /// wildcard placement is decided by the expression compiler.
    pub fn sql(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Contains | Operator::StartsWith | Operator::EndsWith => "LIKE",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Between => "BETWEEN",
        }
    }

    /// True for the operators legal on a compound node.
    pub fn is_conjunction(self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }
}
