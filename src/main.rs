use std::path::PathBuf;

use signup::config::Configuration;
use signup::error::ServerError;
use tokio::net::TcpListener;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let mut config = Configuration::default();
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        config = config.path(PathBuf::from(path));
    }

    // The log filter lives in the file, so reading it goes through a
    // temporary subscriber.
    let config = tracing::subscriber::with_default(
        tracing_subscriber::fmt().finish(),
        || config.read(),
    )?;
    if let Err(err) = signup::telemetry::setup_logging(&config.telemetry.filter) {
        eprintln!("cannot initialize logging: {err}");
    }

    let state = signup::initialize_state(config.clone())?;
    let app = signup::app(state);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
