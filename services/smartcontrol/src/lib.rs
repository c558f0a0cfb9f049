//! SmartControl+ service
//!
//! Hosts the SmartControl+ web front end and offers the same login and
//! dashboard flows as a command-line remote talking to the backend directly.

pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod remote;
pub mod session_file;
pub mod web;

pub use config::{load_config, Config};
pub use error::{Result, SmartControlError};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::api::BackendApi;
use crate::io::ReqwestHttpClient;
use crate::remote::Remote;
use crate::session_file::FileSessionStore;

/// Build the command-line remote described by `config`
pub fn build_remote(config: &Config) -> Result<Remote<FileSessionStore>> {
    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(
        config.backend.timeout_seconds,
    ))?;
    let api = BackendApi::new(&config.backend.api_url, Arc::new(http));
    let store = FileSessionStore::new(&config.session.path);
    Ok(Remote::new(api, store))
}

/// Serve the front end until ctrl-c
pub async fn serve(config: &Config) -> Result<()> {
    let router = web::build_router(&config.server.site_root);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        SmartControlError::Server(format!(
            "Failed to bind to port {}: {}",
            config.server.port, e
        ))
    })?;
    tracing::info!("SmartControl+ listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Shutdown signal received"),
                Err(e) => {
                    tracing::error!("Failed to listen for ctrl-c: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    tracing::info!("SmartControl+ stopped");
    Ok(())
}
