use axum::debug_handler;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use wellness_core::config::Config;
use wellness_core::http_client::ReqwestTextGenerator;
use wellness_core::{HealthProfile, HealthReport, Pipeline, WellnessError};
use wellness_mcp::WellnessMcpHandler;

struct AppState {
    metrics: PrometheusHandle,
    handler: WellnessMcpHandler,
}

#[debug_handler]
async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

#[debug_handler]
async fn banner() -> impl IntoResponse {
    (StatusCode::OK, "Health & Wellness Agent is running.")
}

#[debug_handler]
async fn metrics_endpoint(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = state.metrics.render();
    ([("content-type", "text/plain; version=0.0.4")], body)
}

#[debug_handler]
async fn run_workflow(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<HealthProfile>,
) -> Result<Json<HealthReport>, (StatusCode, String)> {
    state
        .handler
        .run_workflow(profile)
        .await
        .map(Json)
        .map_err(map_err)
}

fn map_err(e: WellnessError) -> (StatusCode, String) {
    match e {
        WellnessError::ServiceUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
        WellnessError::MissingInput(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        WellnessError::Config(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        WellnessError::Http(_) | WellnessError::InvalidResponse(_) => {
            (StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Configure logging from env var `WELLNESS_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("WELLNESS_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env.clone())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,rmcp=warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!(%log_env, "wellness_mcp:http: log filter");

    let builder = PrometheusBuilder::new();
    let handle = builder.install_recorder()?;

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let generator = ReqwestTextGenerator::from_config(&config);
    let pipeline =
        Pipeline::new(Arc::new(generator)).with_generation_timeout(config.generation_timeout);
    let handler = WellnessMcpHandler::with_pipeline(pipeline);

    let state = Arc::new(AppState {
        metrics: handle.clone(),
        handler: handler.clone(),
    });

    // Build rmcp StreamableHttpService mounted at /mcp
    let factory = move || -> Result<_, std::io::Error> { Ok(handler.clone()) };
    let session = std::sync::Arc::new(
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default(),
    );
    let mcp_service = rmcp::transport::streamable_http_server::tower::StreamableHttpService::new(
        factory,
        session,
        rmcp::transport::streamable_http_server::tower::StreamableHttpServerConfig::default(),
    );

    let app = Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/metrics", get(metrics_endpoint))
        .route("/workflow/health", post(run_workflow))
        .nest_service("/mcp", mcp_service)
        .with_state(state.clone());

    let addr: SocketAddr = std::env::var("ADDRESS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8080)));
    info!(%addr, "starting HTTP server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    let server = axum::serve(listener, app.into_make_service());
    if let Err(e) = server
        .with_graceful_shutdown(async {
            signal::ctrl_c()
                .await
                .expect("failed to install ctrl+c handler");
        })
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
