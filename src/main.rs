use anyhow::{Context, Result};
use axum::{http::HeaderValue, Router};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apikey_gate::{config::Config, routes};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!(
                        "apikey_gate={level},tower_http={level}",
                        level = config.log_level
                    )
                    .into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting ApiKey Gate");
    info!("✅ Configuration loaded");
    info!("   CORS origin: {}", config.cors_origin);

    let cors = if config.cors_origin == "*" {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origin = config
            .cors_origin
            .parse::<HeaderValue>()
            .context("CORS_ORIGIN must be a valid header value")?;
        CorsLayer::new().allow_origin(origin)
    }
    .allow_methods(Any)
    .allow_headers(Any);

    let app = Router::new()
        .nest("/api", routes::create_routes())
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let ip = config
        .host
        .parse::<std::net::IpAddr>()
        .context("HOST must be a valid IP address")?;
    let addr = SocketAddr::new(ip, config.port);
    info!("🌐 Server listening on http://{}", addr);
    info!("💚 Health check: http://{}/api/health", addr);
    info!("🔑 Protected: http://{}/api/auth/whoami", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
