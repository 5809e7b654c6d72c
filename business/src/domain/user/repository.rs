use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewUser, User};
use super::value_objects::UserId;

/// Storage port for users.
///
/// Absence is not an error: `get_by_id` answers `None` and `delete` answers
/// `false` when no row matched.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError>;
}
