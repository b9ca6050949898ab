use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use news_categorizer::config::Config;
use news_categorizer::fetcher::Fetcher;
use news_categorizer::routes::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "news_categorizer=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config_path = std::env::var("NEWS_CONFIG").unwrap_or_else(|_| "news.toml".to_string());
    let config = Config::load_or_default(&config_path)?.apply_env();
    info!("Loaded configuration from {}", config_path);

    if config.upstream.api_key.is_none() {
        warn!("NEWS_API_KEY is not set, /news will answer with an error");
    }

    let fetcher = Fetcher::new(&config.upstream)?;
    let state = Arc::new(AppState { fetcher });
    let app = router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("Server starting on http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
