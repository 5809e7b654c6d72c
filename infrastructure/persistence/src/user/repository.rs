use std::sync::Arc;

use async_trait::async_trait;

use business::domain::environment::Environment;
use business::domain::errors::RepositoryError;
use business::domain::user::model::{NewUser, User};
use business::domain::user::repository::UserRepository;
use business::domain::user::value_objects::UserId;

use crate::connection::ConnectionManager;

use super::entity::UserEntity;

pub struct UserRepositoryPostgres {
    connections: Arc<ConnectionManager>,
    environment: Environment,
}

impl UserRepositoryPostgres {
    pub fn new(connections: Arc<ConnectionManager>, environment: Environment) -> Self {
        Self {
            connections,
            environment,
        }
    }

    /// Answer used when no pool is available: placeholder data outside
    /// production, an explicit configuration error inside it.
    fn without_storage<T>(&self, placeholder: impl FnOnce() -> T) -> Result<T, RepositoryError> {
        if self.environment.is_production() {
            return Err(RepositoryError::NotConfigured);
        }
        tracing::debug!(environment = %self.environment, "no database, serving placeholder");
        Ok(placeholder())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        let Some(db) = self.connections.current() else {
            return self.without_storage(|| vec![User::placeholder()]);
        };

        let entities = db
            .bounded(
                sqlx::query_as::<_, UserEntity>(
                    "SELECT id, id_document, username, email, created_at FROM users ORDER BY id",
                )
                .fetch_all(db.pool()),
            )
            .await?;

        entities.into_iter().map(UserEntity::into_domain).collect()
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let Some(db) = self.connections.current() else {
            return self.without_storage(|| Some(User::placeholder()));
        };

        let entity = db
            .bounded(
                sqlx::query_as::<_, UserEntity>(
                    "SELECT id, id_document, username, email, created_at FROM users WHERE id = $1",
                )
                .bind(id.value())
                .fetch_optional(db.pool()),
            )
            .await?;

        entity.map(UserEntity::into_domain).transpose()
    }

    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let Some(db) = self.connections.current() else {
            return self.without_storage(User::placeholder);
        };

        let entity = db
            .bounded(
                sqlx::query_as::<_, UserEntity>(
                    r#"INSERT INTO users (id_document, username, email, password)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, id_document, username, email, created_at"#,
                )
                .bind(&user.id_document)
                .bind(&user.username)
                .bind(&user.email)
                .bind(&user.password_hash)
                .fetch_one(db.pool()),
            )
            .await?;

        entity.into_domain()
    }

    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError> {
        let Some(db) = self.connections.current() else {
            return self.without_storage(|| true);
        };

        let result = db
            .bounded(
                sqlx::query("DELETE FROM users WHERE id = $1")
                    .bind(id.value())
                    .execute(db.pool()),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
