use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::value_objects::UserId;

pub struct DeleteUserParams {
    pub id: UserId,
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), UserError>;
}
