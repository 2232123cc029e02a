use poem::{
    Endpoint, EndpointExt, IntoResponse, Response, Route, Server as PoemServer,
    endpoint::StaticFilesEndpoint,
    http::StatusCode,
    listener::{Listener, TcpListener},
    middleware::{CookieJarManager, Tracing},
    web::Json,
};
use poem_openapi::OpenApiService;
use tokio::task::JoinHandle;

use crate::api::error::UncaughtErrorResponse;
use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::{DependencyContainer, SharedDatabase};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let database = container.database.clone();
        let app = build_app(config, container);

        let acceptor = TcpListener::bind(addr.clone()).into_acceptor().await?;
        tracing::info!("Server is running on http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);

        spawn_database_connection(&database);

        PoemServer::new_with_acceptor(acceptor).run(app).await?;
        Ok(())
    }
}

/// Starts connecting in the background; the pool stays in the shared handle.
fn spawn_database_connection(database: &SharedDatabase) -> Option<JoinHandle<()>> {
    let database = database.clone()?;
    Some(tokio::spawn(async move {
        match database.connect().await {
            Ok(_) => tracing::info!("Database connected"),
            Err(err) => tracing::error!(error = %err, "Database connection failed"),
        }
    }))
}

/// Assembles routes and middleware.
///
/// Order of the middleware stack, innermost first: catch-all error handler,
/// cookie jar, CORS, request tracing.
pub fn build_app(config: AppConfig, container: DependencyContainer) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (container.health_api, container.assistant_api),
        "Chat Backend API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}/api", config.server.bind_address()));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    let mut app = Route::new()
        .nest("/api", api_service)
        .nest("/api/auth", container.external_routes.auth)
        .nest("/api/messages", container.external_routes.messages)
        .nest("/docs", ui)
        .nest("/openapi.json", spec);

    // Unmatched paths under /api stay 404 in production; only the rest fall
    // back to the bundle's index.html.
    if let Some(dist_dir) = config.frontend.static_dir() {
        tracing::info!("Serving frontend bundle from {}", dist_dir.display());
        app = app.nest(
            "/",
            StaticFilesEndpoint::new(dist_dir)
                .index_file("index.html")
                .fallback_to_index(),
        );
    }

    // The database handle lives as long as the app; route groups read it as
    // `Data<&SharedDatabase>`.
    app.catch_all_error(handle_uncaught_error)
        .with(CookieJarManager::new())
        .with(config.cors.middleware())
        .with(Tracing)
        .data(container.database)
}

/// Server errors become a generic 500; client errors such as 404 and 405 keep
/// their own response.
async fn handle_uncaught_error(err: poem::Error) -> Response {
    if !err.status().is_server_error() {
        return err.into_response();
    }

    tracing::error!(error = ?err, "Server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(UncaughtErrorResponse::default()),
    )
        .into_response()
}
