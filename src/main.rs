use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use stock_tracker::app;
use stock_tracker::config::AppConfig;
use stock_tracker::external::price_provider::PriceProvider;
use stock_tracker::external::yahoofinance::YahooFinanceProvider;
use stock_tracker::logging::{init_logging, LoggingConfig};
use stock_tracker::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env()?;

    let provider: Arc<dyn PriceProvider> = Arc::new(
        YahooFinanceProvider::new(&config.yahoo_base_url)
            .context("failed to create Yahoo Finance provider")?,
    );
    tracing::info!("Using price provider: Yahoo Finance ({})", config.yahoo_base_url);

    let app = app::create_app(AppState::new(provider));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Stock Tracker running at http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
