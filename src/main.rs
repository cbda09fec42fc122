//! AI-DSS server binary.

use std::process::ExitCode;

use ai_dss::adapters::http::api_router;
use ai_dss::bootstrap::build_state;
use ai_dss::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = ai_dss::logging::init(&config.server) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server terminated");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: AppConfig) -> std::io::Result<()> {
    let addr = config.server.socket_addr();

    let app = api_router(build_state(&config), &config.server);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        timeout_secs = config.server.request_timeout_secs,
        simulation = config.simulation.enabled,
        "AI-DSS listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
