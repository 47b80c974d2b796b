//! Server setup and lifecycle management

use tokio::net::TcpListener;

use crate::api::{create_router, state::AppState};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};

pub struct Server {
    config: AppConfig,
    state: AppState,
}

impl Server {
    /// Validate the configuration and wire the application state.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate()?;
        let state = AppState::in_memory(&config.auth);
        Ok(Self { config, state })
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(self) -> AppResult<()> {
        let addr = self.config.server.listen_addr;
        let app = create_router(self.state, &self.config.server);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Blog backend listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::Server(e.to_string()))?;

        tracing::info!("Blog backend shutting down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
