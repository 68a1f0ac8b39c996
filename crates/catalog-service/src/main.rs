use catalog_service::config::ServiceConfig;
use catalog_service::http::{self, AppState};
use catalog_service::lifecycle::CatalogSystem;
use clap::Parser;
use resource_framework::tracing::setup_tracing;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    info!(?config, "Starting catalog service");

    let system = CatalogSystem::start(&config)?;
    let app = http::router(AppState::from_system(&system));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router and its client clones are gone, so the actors can drain and stop
    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received, shutting down"),
        Err(e) => {
            error!(error = %e, "Unable to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
