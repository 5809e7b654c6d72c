use std::sync::Arc;

use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::health::model::HealthReport;
use business::domain::health::use_cases::check::CheckHealthUseCase;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckBody {
    /// `ok` or `error`
    pub status: String,
    /// `skipped` when no database is configured outside production
    #[oai(skip_serializing_if_is_none)]
    pub db: Option<String>,
    /// Why the service is unhealthy
    #[oai(skip_serializing_if_is_none)]
    pub detail: Option<String>,
}

#[derive(ApiResponse)]
pub enum HealthCheckResponse {
    #[oai(status = 200)]
    Ok(Json<HealthCheckBody>),
    #[oai(status = 503)]
    Unavailable(Json<HealthCheckBody>),
}

impl From<HealthReport> for HealthCheckResponse {
    fn from(report: HealthReport) -> Self {
        let (db, detail) = match report {
            HealthReport::Ok => (None, None),
            HealthReport::OkStorageSkipped => (Some("skipped"), None),
            HealthReport::StorageNotConfigured => (None, Some("database not configured")),
            HealthReport::StorageUnavailable => (None, Some("database unavailable")),
        };
        let body = Json(HealthCheckBody {
            status: if report.is_healthy() { "ok" } else { "error" }.to_string(),
            db: db.map(str::to_string),
            detail: detail.map(str::to_string),
        });

        if report.is_healthy() {
            HealthCheckResponse::Ok(body)
        } else {
            HealthCheckResponse::Unavailable(body)
        }
    }
}

/// Health API for monitoring and infrastructure checks
pub struct HealthApi {
    check_use_case: Arc<dyn CheckHealthUseCase>,
}

impl HealthApi {
    pub fn new(check_use_case: Arc<dyn CheckHealthUseCase>) -> Self {
        Self { check_use_case }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Reports whether the service and its database can serve traffic.
    ///
    /// ## Response
    /// - `200 {status: "ok"}`: database answered a round-trip query
    /// - `200 {status: "ok", db: "skipped"}`: no database outside production
    /// - `503 {status: "error", detail}`: database missing in production or unreachable
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthCheckResponse {
        self.check_use_case.execute().await.into()
    }
}
