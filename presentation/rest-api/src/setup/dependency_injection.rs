use std::sync::Arc;

use logger::TracingLogger;
use password::argon2_hasher::Argon2PasswordHasher;
use persistence::connection::ConnectionManager;
use persistence::health::PostgresStorageProbe;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::health::check::CheckHealthUseCaseImpl;
use business::application::user::create::CreateUserUseCaseImpl;
use business::application::user::delete::DeleteUserUseCaseImpl;
use business::application::user::get_all::GetAllUsersUseCaseImpl;
use business::application::user::get_by_id::GetUserByIdUseCaseImpl;
use business::domain::environment::Environment;
use business::domain::health::services::StorageProbe;
use business::domain::user::repository::UserRepository;
use business::domain::user::services::PasswordHasher;

use crate::api::health::routes::HealthApi;
use crate::api::root::routes::RootApi;
use crate::api::user::routes::UserApi;

pub struct DependencyContainer {
    pub root_api: RootApi,
    pub health_api: HealthApi,
    pub user_api: UserApi,
}

impl DependencyContainer {
    pub fn new(connections: Arc<ConnectionManager>, environment: Environment) -> Self {
        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(
            connections.clone(),
            environment,
        ));
        let storage_probe = Arc::new(PostgresStorageProbe::new(connections));
        let hasher = Arc::new(Argon2PasswordHasher::new());

        Self::with_adapters(user_repository, storage_probe, hasher, environment)
    }

    pub fn with_adapters(
        user_repository: Arc<dyn UserRepository>,
        storage_probe: Arc<dyn StorageProbe>,
        hasher: Arc<dyn PasswordHasher>,
        environment: Environment,
    ) -> Self {
        let user_logger = Arc::new(TracingLogger::new("users"));
        let health_logger = Arc::new(TracingLogger::new("health"));

        // User use cases
        let create_use_case = Arc::new(CreateUserUseCaseImpl {
            repository: user_repository.clone(),
            hasher,
            logger: user_logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllUsersUseCaseImpl {
            repository: user_repository.clone(),
            logger: user_logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetUserByIdUseCaseImpl {
            repository: user_repository.clone(),
            logger: user_logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteUserUseCaseImpl {
            repository: user_repository,
            logger: user_logger,
        });

        // Health use case
        let check_use_case = Arc::new(CheckHealthUseCaseImpl {
            probe: storage_probe,
            environment,
            logger: health_logger,
        });

        Self {
            root_api: RootApi,
            health_api: HealthApi::new(check_use_case),
            user_api: UserApi::new(
                create_use_case,
                get_all_use_case,
                get_by_id_use_case,
                delete_use_case,
            ),
        }
    }
}
