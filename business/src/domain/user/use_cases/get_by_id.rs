use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::value_objects::UserId;

pub struct GetUserByIdParams {
    pub id: UserId,
}

#[async_trait]
pub trait GetUserByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetUserByIdParams) -> Result<User, UserError>;
}
