use crate::domain::errors::DomainError;

/// Unique-index violations (duplicate email or slug) surface as conflicts;
/// everything else is a persistence failure.
pub(crate) fn map_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return DomainError::Conflict(db_err.message().to_string());
        }
    }
    DomainError::Persistence(err.to_string())
}
