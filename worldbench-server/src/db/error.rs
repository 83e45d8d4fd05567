//! Database error type

/// Result of every data-access operation.
pub type Outcome<T> = Result<T, DbError>;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The pool could not hand out a connection (timed out, closed, unreachable).
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement failed or its result could not be decoded.
    #[error("query error: {0}")]
    Query(#[source] sqlx::Error),

    /// A lookup by id matched nothing. Ids are dense, so this is a query error.
    #[error("query error: no {resource} row with id {id}")]
    NotFound { resource: &'static str, id: i32 },
}

impl DbError {
    /// Coarse error kind for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connection(_) => "connection",
            Self::Query(_) | Self::NotFound { .. } => "query",
        }
    }
}
