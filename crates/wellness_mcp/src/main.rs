use std::sync::Arc;

use wellness_core::config::Config;
use wellness_core::http_client::ReqwestTextGenerator;
use wellness_core::Pipeline;
use wellness_mcp::WellnessMcpHandler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configure logging from env var `WELLNESS_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("WELLNESS_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    // Append per-target overrides to keep rmcp internals quiet by default
    let combined_filter = format!("{},rmcp=warn,serve_inner=warn", log_env);
    let env_filter = tracing_subscriber::EnvFilter::try_new(combined_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,rmcp=warn,serve_inner=warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!("wellness_mcp: log filter: {}", log_env);

    let config = Config::from_env()?;
    tracing::info!(
        "wellness_mcp: generation endpoint {} (model {})",
        config.base_url,
        config.model
    );

    let generator = ReqwestTextGenerator::from_config(&config);
    let pipeline =
        Pipeline::new(Arc::new(generator)).with_generation_timeout(config.generation_timeout);
    let handler = WellnessMcpHandler::with_pipeline(pipeline);

    tracing::info!(
        "wellness_mcp: registered {} tools and {} prompts",
        handler.tool_count(),
        handler.prompt_count()
    );

    // Start RMCP server over stdio transport so it's immediately usable with MCP clients
    tracing::info!("wellness_mcp: starting stdio MCP server...");

    use rmcp::serve_server;
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let server = serve_server(handler, transport).await?;

    tracing::info!("wellness_mcp: service initialized as server");

    server.waiting().await?;

    Ok(())
}
