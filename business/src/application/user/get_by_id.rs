use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};

pub struct GetUserByIdUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserByIdUseCase for GetUserByIdUseCaseImpl {
    async fn execute(&self, params: GetUserByIdParams) -> Result<User, UserError> {
        self.logger.info(&format!("Fetching user by id: {}", params.id));

        let user = self.repository.get_by_id(params.id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to fetch user {}: {}", params.id, e));
            UserError::from(e)
        })?;

        user.ok_or(UserError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::user::model::NewUser;
    use crate::domain::user::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
            async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
            async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
            async fn delete(&self, id: UserId) -> Result<bool, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_user_when_exists() {
        let user_id = UserId::new(5).unwrap();
        let now = Utc::now();
        let mut mock_repo = MockUserRepo::new();

        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == user_id)
            .returning(move |id| {
                Ok(Some(User::from_repository(
                    id,
                    "987654321".to_string(),
                    "jane".to_string(),
                    "jane@example.com".to_string(),
                    Some(now),
                )))
            });

        let use_case = GetUserByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetUserByIdParams { id: user_id }).await;

        assert!(result.is_ok());
        let user = result.unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.username, "jane");
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_row_matches() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let use_case = GetUserByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetUserByIdParams {
                id: UserId::new(404).unwrap(),
            })
            .await;

        assert!(matches!(result, Err(UserError::NotFound)));
    }
}
