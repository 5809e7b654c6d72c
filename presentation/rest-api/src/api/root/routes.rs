use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct BannerResponse {
    pub message: String,
}

pub struct RootApi;

#[OpenApi]
impl RootApi {
    /// Service banner
    ///
    /// Confirms the API is online.
    #[oai(path = "/", method = "get", tag = "ApiTags::Service")]
    async fn banner(&self) -> Json<BannerResponse> {
        Json(BannerResponse {
            message: "NOVACORE API V1 ONLINE".to_string(),
        })
    }
}
