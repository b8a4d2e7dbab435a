use clipnote::{AppState, api::routes::create_router, config::Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("clipnote=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;
    if config.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; summaries will fail");
    }
    tracing::info!(model = %config.gemini_model, "Starting server on {}", server_addr);

    let app = create_router(AppState::new(&config));
    let listener = TcpListener::bind(server_addr).await?;

    tracing::info!("Listening on http://{}", server_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down");
}
