mod config;
mod routes;

use std::net::SocketAddr;
use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, DEFAULT_LOG_FILTER, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env();
    let filter = config.as_ref().map_or(DEFAULT_LOG_FILTER, |c| c.log_filter.as_str());
    tracing_subscriber::fmt().with_env_filter(EnvFilter::new(filter)).init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "storefront exited");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Result<ServerConfig, ConfigError>) -> Result<(), StartupError> {
    let config = config?;

    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    leptos_options.site_addr = config.addr;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| StartupError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "storefront listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
