use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => DomainError::Conflict("unique constraint violated".into()),
            ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced record not found".into())
            }
            ErrorKind::NotNullViolation => {
                DomainError::Validation("required column is missing".into())
            }
            ErrorKind::CheckViolation => {
                DomainError::Validation("check constraint violated".into())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        sqlx::Error::RowNotFound => DomainError::NotFound("article not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
