use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_all::GetAllUsersUseCase;

pub struct GetAllUsersUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllUsersUseCase for GetAllUsersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<User>, UserError> {
        self.logger.info("Fetching all users");

        let users = self.repository.get_all().await.map_err(|e| {
            self.logger.error(&format!("Failed to list users: {}", e));
            UserError::from(e)
        })?;

        self.logger.debug(&format!("Found {} users", users.len()));
        Ok(users)
    }
}
