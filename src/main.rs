use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use career_explorer::{
    config::Config,
    routes,
    services::ask_client::HttpAskClient,
    state::AppState,
};

/// Used when `RUST_LOG` is unset.
const DEFAULT_LOG_DIRECTIVES: &str = "career_explorer=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let asker = HttpAskClient::new(config.ask_endpoint.clone(), config.ask_timeout)
        .context("failed to build HTTP client")?;
    info!(endpoint = asker.endpoint(), timeout = ?config.ask_timeout, "inference endpoint configured");

    let state = AppState::new(Arc::new(asker), config.seed_greeting)?.shared();

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("🚀 Career Explorer running at http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
