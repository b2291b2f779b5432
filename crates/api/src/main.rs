use std::net::SocketAddr;
use std::sync::Arc;

use npo2xml_core::channel::ChannelCatalog;
use npo2xml_guide::GuideApi;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use npo2xml_api::config::ServerConfig;
use npo2xml_api::router::build_app_router;
use npo2xml_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "npo2xml_api=debug,npo2xml_guide=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Channel catalog ---
    let catalog = match &config.channels_path {
        Some(path) => ChannelCatalog::load(path),
        None => ChannelCatalog::bundled(),
    }
    .expect("Failed to load channel catalog");
    if catalog.is_empty() {
        tracing::warn!("Channel catalog is empty, listings will contain no channels");
    }
    tracing::info!(
        channels = catalog.len(),
        source = config.channels_path.as_deref().unwrap_or("bundled"),
        "Channel catalog loaded",
    );

    // --- Guide client ---
    let guide = GuideApi::new(config.guide_base_url.clone(), config.guide_user_agent.clone());
    tracing::info!(base_url = %config.guide_base_url, "Guide client created");

    // --- App state ---
    let state = AppState {
        catalog: Arc::new(catalog),
        guide,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
