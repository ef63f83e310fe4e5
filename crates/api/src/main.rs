//! API Server Application

use anyhow::Result;
use minibank_api::config::AppConfig;
use minibank_api::routes;
use minibank_api::state::AppState;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "minibank_api=info,minibank_business=info,tower_http=info".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let pool = minibank_persistence::init_database(&config.database_url).await?;

    let addr: SocketAddr = config.bind_address().parse()?;
    let app = routes::create_router(AppState::new(pool, config));

    tracing::info!("API server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
