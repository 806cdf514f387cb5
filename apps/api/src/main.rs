mod card;
mod config;
mod errors;
mod layout;
mod records;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::WrapStrategy;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed or non-positive values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cardfit v{}", env!("CARGO_PKG_VERSION"));

    info!(
        "Canvas {}x{}px, {:?} {:?} up to {}px",
        config.canvas.width,
        config.canvas.height,
        config.layout.font_family,
        config.layout.font_weight,
        config.layout.max_font_size_px
    );
    match config.layout.wrap {
        WrapStrategy::Fixed {
            max_line_length_chars,
        } => info!("Wrapping at {max_line_length_chars} characters"),
        WrapStrategy::Optimized => info!("Wrapping width chosen per card"),
    }
    match &config.records_path {
        Some(path) => info!("Random cards drawn from {}", path.display()),
        None => info!("RECORDS_PATH not set; random card endpoint disabled"),
    }

    let state = AppState::new(config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
