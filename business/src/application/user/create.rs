use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUser, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::create::{CreateUserParams, CreateUserUseCase};
use crate::domain::user::validation::validate_registration;

pub struct CreateUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateUserUseCase for CreateUserUseCaseImpl {
    async fn execute(&self, params: CreateUserParams) -> Result<User, UserError> {
        let registration = validate_registration(
            params.id_document,
            params.username,
            params.email,
            params.password,
        )
        .map_err(|errors| {
            self.logger.debug(&format!(
                "User registration rejected: {} invalid field(s)",
                errors.len()
            ));
            UserError::Validation(errors)
        })?;

        self.logger
            .info(&format!("Creating user: {}", registration.username));

        let password_hash = self.hasher.hash(&registration.password)?;
        let new_user = NewUser {
            id_document: registration.id_document,
            username: registration.username,
            email: registration.email,
            password_hash,
        };

        let user = self.repository.create(&new_user).await.map_err(|e| {
            self.logger.error(&format!("Failed to create user: {}", e));
            UserError::from(e)
        })?;

        self.logger.info(&format!("User created with id: {}", user.id));
        Ok(user)
    }
}
