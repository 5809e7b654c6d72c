use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::user::model::User;
use business::domain::user::value_objects::UserId;

/// Row projection of `users`. The password column is never selected.
#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub id_document: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> Result<User, RepositoryError> {
        let id = UserId::new(self.id).map_err(|_| {
            tracing::error!(id = self.id, "stored user has a non-positive id");
            RepositoryError::DatabaseError
        })?;
        Ok(User::from_repository(
            id,
            self.id_document,
            self.username,
            self.email,
            Some(self.created_at),
        ))
    }
}
