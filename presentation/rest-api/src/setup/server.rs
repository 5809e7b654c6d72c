use std::time::Duration;

use poem::middleware::{Cors, NormalizePath, Tracing, TrailingSlash};
use poem::{Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener};
use poem_openapi::OpenApiService;

use crate::api::error::malformed_body;
use crate::config::app_config::AppConfig;
use crate::config::cors_config;
use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::shutdown::shutdown_signal;

const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    /// Assemble the routed application with its middleware stack.
    pub fn app(
        container: DependencyContainer,
        server_url: &str,
        cors: Cors,
    ) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (container.root_api, container.health_api, container.user_api),
            "Users API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest("/", api_service)
            .catch_error(malformed_body)
            .with(cors)
            .with(NormalizePath::new(TrailingSlash::Trim))
            .with(Tracing)
    }

    pub async fn run(config: &AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let server_url = format!("http://{}", addr);
        let app = Self::app(
            container,
            &server_url,
            cors_config::init_cors(&config.cors_origins),
        );

        tracing::info!(
            environment = %config.runtime.environment(),
            "Server running at {}",
            server_url
        );
        tracing::info!("Swagger UI at {}/docs", server_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", server_url);

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(app, shutdown_signal(), Some(DRAIN_TIMEOUT))
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
