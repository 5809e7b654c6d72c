use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

/// Raw creation payload. Every field is optional so that missing fields are
/// reported by validation rather than rejected as a malformed body.
pub struct CreateUserParams {
    pub id_document: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, params: CreateUserParams) -> Result<User, UserError>;
}
