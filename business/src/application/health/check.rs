use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::environment::Environment;
use crate::domain::health::model::{HealthReport, StorageStatus};
use crate::domain::health::services::StorageProbe;
use crate::domain::health::use_cases::check::CheckHealthUseCase;
use crate::domain::logger::Logger;

pub struct CheckHealthUseCaseImpl {
    pub probe: Arc<dyn StorageProbe>,
    pub environment: Environment,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckHealthUseCase for CheckHealthUseCaseImpl {
    async fn execute(&self) -> HealthReport {
        match self.probe.probe().await {
            StorageStatus::Reachable => HealthReport::Ok,
            StorageStatus::Disabled if self.environment.is_production() => {
                self.logger
                    .warn("Health check failed: database not configured in production");
                HealthReport::StorageNotConfigured
            }
            StorageStatus::Disabled => HealthReport::OkStorageSkipped,
            StorageStatus::Unreachable => {
                self.logger.error("Health check failed: database unavailable");
                HealthReport::StorageUnavailable
            }
        }
    }
}
