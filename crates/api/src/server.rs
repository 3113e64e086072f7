//! HTTP server implementation for the Moodline API.

use crate::{build_router, ApiConfig, ApiError};
use moodline_analysis::AnalysisContext;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

/// HTTP server for the Moodline API.
pub struct ApiServer {
    config: ApiConfig,
    context: Arc<AnalysisContext>,
}

impl ApiServer {
    /// Create a new API server around a loaded analysis context.
    pub fn new(config: ApiConfig, context: Arc<AnalysisContext>) -> Self {
        Self { config, context }
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(self) -> Result<(), ApiError> {
        let router = build_router(self.context, &self.config);
        let addr = self.config.bind_addr;

        info!("Starting Moodline API server");
        info!("CORS enabled: {}", self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            ApiError::Io(std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                format!("Failed to bind to {addr}: {e}"),
            ))
        })?;
        info!("Server listening on {addr}");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ApiError::Io)?;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolve when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
