use crate::domain::errors::RepositoryError;

use super::validation::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.invalid_id")]
    InvalidId,
    #[error("user.validation_failed")]
    Validation(Vec<FieldError>),
    #[error("user.not_found")]
    NotFound,
    #[error("user.password_hash_failed")]
    PasswordHash,
    #[error("repository.not_configured")]
    StorageNotConfigured,
    #[error("repository.unavailable")]
    StorageUnavailable,
    #[error("repository.database_error")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotConfigured => UserError::StorageNotConfigured,
            RepositoryError::Unavailable => UserError::StorageUnavailable,
            other => UserError::Repository(other),
        }
    }
}
