use thiserror::Error;

pub type Result<T> = std::result::Result<T, self::Error>;

/// Every failure the engine itself can produce, plus the pass-through
/// variant for the executor collaborator. Builders either return a complete
/// statement or one of these; no partial SQL ever escapes.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument {
        param: &'static str,
        reason: String,
    },

    #[error("malformed expression: {0}")]
    MalformedExpression(String),

    /// The dialect requires an ORDER BY before OFFSET/FETCH is valid.
    #[error("pagination on this dialect requires an order-by clause")]
    MissingOrderBy,

    /// Surfaced unchanged from the executor collaborator; never retried or
    /// reinterpreted here.
    #[error("execution failed: {0}")]
    Execution(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    pub fn execution<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Execution(Box::new(source))
    }
}
