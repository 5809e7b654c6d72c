/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// No storage is configured and the environment does not allow placeholders.
    #[error("repository.not_configured")]
    NotConfigured,
    /// Storage is configured but could not be reached in time.
    #[error("repository.unavailable")]
    Unavailable,
    #[error("repository.database_error")]
    DatabaseError,
}
