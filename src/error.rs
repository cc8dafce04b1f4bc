//! Error types for the schema layer
use sea_orm::{DbErr, RuntimeErr};
use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

/// Every constraint violation keeps the storage engine's original error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Uniqueness violation: {0}")]
    UniquenessViolation(DbErr),

    #[error("Not-null violation: {0}")]
    NotNullViolation(DbErr),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(DbErr),

    #[error("Length violation: {0}")]
    LengthViolation(DbErr),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Database error: {0}")]
    Database(DbErr),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Violation {
    Unique,
    NotNull,
    ForeignKey,
    Length,
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        let violation = match &err {
            DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
            | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db_err))) => {
                classify(db_err.as_ref())
            }
            _ => None,
        };

        match violation {
            Some(Violation::Unique) => StoreError::UniquenessViolation(err),
            Some(Violation::NotNull) => StoreError::NotNullViolation(err),
            Some(Violation::ForeignKey) => StoreError::ForeignKeyViolation(err),
            Some(Violation::Length) => StoreError::LengthViolation(err),
            None => StoreError::Database(err),
        }
    }
}

fn classify(db_err: &dyn DatabaseError) -> Option<Violation> {
    match db_err.kind() {
        ErrorKind::UniqueViolation => Some(Violation::Unique),
        ErrorKind::ForeignKeyViolation => Some(Violation::ForeignKey),
        ErrorKind::NotNullViolation => Some(Violation::NotNull),
        // The only CHECK constraints in the schema bound string lengths.
        ErrorKind::CheckViolation => Some(Violation::Length),
        _ => db_err.code().and_then(|code| violation_for_code(&code)),
    }
}

/// Vendor codes: SQLite extended result codes, MySQL error numbers and
/// PostgreSQL SQLSTATE.
fn violation_for_code(code: &str) -> Option<Violation> {
    match code {
        "2067" | "1555" | "1062" | "23505" => Some(Violation::Unique),
        "1299" | "1048" | "1364" | "23502" => Some(Violation::NotNull),
        // SQLite raises RESTRICT actions as 1811; the schema declares no triggers.
        "787" | "1811" | "1451" | "1452" | "23503" => Some(Violation::ForeignKey),
        "275" | "1406" | "3819" | "22001" | "23514" => Some(Violation::Length),
        _ => None,
    }
}
