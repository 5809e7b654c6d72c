use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use poem::Endpoint;
use poem::http::StatusCode;
use poem::middleware::Cors;
use poem::test::TestResponse;
use serde_json::Value;

use business::domain::environment::Environment;
use business::domain::errors::RepositoryError;
use business::domain::health::model::StorageStatus;
use business::domain::health::services::StorageProbe;
use business::domain::user::errors::UserError;
use business::domain::user::model::{NewUser, User};
use business::domain::user::repository::UserRepository;
use business::domain::user::services::PasswordHasher;
use business::domain::user::value_objects::UserId;

use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::server::Server;

#[derive(Default)]
struct Rows {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

/// Storage double that behaves like a real table with a serial key.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Rows>,
}

impl InMemoryUserRepository {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.rows.lock().unwrap().users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.rows.lock().unwrap().users.get(&id.value()).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        rows.next_id += 1;
        let id = rows.next_id;
        let stored = User::from_repository(
            UserId::new(id).unwrap(),
            user.id_document.clone(),
            user.username.clone(),
            user.email.clone(),
            Some(Utc::now()),
        );
        rows.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().users.remove(&id.value()).is_some())
    }
}

/// Probe that always answers with the same status.
pub struct StaticProbe(StorageStatus);

impl StaticProbe {
    pub fn new(status: StorageStatus) -> Arc<Self> {
        Arc::new(Self(status))
    }
}

#[async_trait]
impl StorageProbe for StaticProbe {
    async fn probe(&self) -> StorageStatus {
        self.0
    }
}

struct PrefixHasher;

impl PasswordHasher for PrefixHasher {
    fn hash(&self, password: &str) -> Result<String, UserError> {
        Ok(format!("hashed:{}", password))
    }
}

pub fn container(
    repository: Arc<dyn UserRepository>,
    probe: Arc<dyn StorageProbe>,
    environment: Environment,
) -> DependencyContainer {
    DependencyContainer::with_adapters(repository, probe, Arc::new(PrefixHasher), environment)
}

pub fn app(container: DependencyContainer) -> impl Endpoint {
    Server::app(container, "http://localhost:3000", Cors::new())
}

pub async fn read_json(resp: TestResponse) -> (StatusCode, Value) {
    let status = resp.0.status();
    let body = resp.0.into_body().into_string().await.unwrap();
    (status, serde_json::from_str(&body).unwrap())
}
