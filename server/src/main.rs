mod app;
mod config;
mod loader;
mod routes;
mod state;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::loader::DocumentPaths;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let data_dir = config::data_dir();
    let paths = DocumentPaths::in_dir(&data_dir);
    tracing::info!(data_dir = %data_dir.display(), "Loading feature documents...");

    let store = match loader::load(&paths).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "failed to load feature documents");
            return;
        }
    };
    match store.year_bounds() {
        Some((earliest, latest)) => tracing::info!(earliest, latest, "year range"),
        None => tracing::warn!("no feature carries a usable year; every year will render empty"),
    }

    let state = AppState::new(store, data_dir, config::static_dir());
    let app = app::build_app(state);

    let addr = format!("0.0.0.0:{}", config::server_port());
    tracing::info!("Mennonite colony map server listening on {addr}");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind TCP listener");
            return;
        }
    };
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server failed");
    }

    tracing::info!("Server shut down gracefully");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        let mut sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                return;
            }
        };
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
