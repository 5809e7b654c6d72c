use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};

pub struct DeleteUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserUseCaseImpl {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), UserError> {
        self.logger.info(&format!("Deleting user: {}", params.id));

        let deleted = self.repository.delete(params.id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to delete user {}: {}", params.id, e));
            UserError::from(e)
        })?;

        if !deleted {
            return Err(UserError::NotFound);
        }

        self.logger.info(&format!("User deleted: {}", params.id));
        Ok(())
    }
}
