use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use invoice_assistant::config::Config;
use invoice_assistant::shell::http::router;
use invoice_assistant::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config);
    if config.telegram.is_none() {
        tracing::warn!("telegram credentials not configured, /send_telegram will fail");
    }

    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("Invoice Assistant API listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
