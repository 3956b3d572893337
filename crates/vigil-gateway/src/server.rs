//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use vigil_vision::{GeminiConfig, GeminiVisionModel, UnconfiguredModel, VisionError, VisionModel};

/// Vigil gateway server
pub struct Server {
    config: GatewayConfig,
    state: AppState,
}

impl Server {
    /// Create a server whose model is built from `config.model`
    pub fn new(config: GatewayConfig) -> Self {
        let model = build_model(&config.model);
        Self::with_model(config, model)
    }

    /// Create a server around an existing model
    pub fn with_model(config: GatewayConfig, model: Arc<dyn VisionModel>) -> Self {
        Self {
            state: AppState::new(model),
            config,
        }
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone(), &self.config.server)
    }

    /// Run the server until Ctrl+C or SIGTERM
    pub async fn run(self) -> GatewayResult<()> {
        let addr = self.config.server.listen_addr;
        let app = self.router();

        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!(
            version = %self.state.version,
            model = self.state.model.name(),
            "Vigil gateway listening on {}",
            local_addr
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| GatewayError::Server(e.to_string()))?;

        tracing::info!("Vigil gateway shut down");
        Ok(())
    }
}

/// Build the Gemini adapter, or a placeholder that fails every call when the
/// adapter cannot be configured.
pub fn build_model(config: &GeminiConfig) -> Arc<dyn VisionModel> {
    model_or_placeholder(GeminiVisionModel::new(config))
}

fn model_or_placeholder(
    built: Result<GeminiVisionModel, VisionError>,
) -> Arc<dyn VisionModel> {
    match built {
        Ok(model) => {
            tracing::info!(model = model.model(), "Gemini vision model configured");
            Arc::new(model)
        }
        Err(err) => {
            tracing::warn!(error = %err, "vision model unavailable; /analyze will report errors");
            let reason = match err {
                VisionError::InvalidConfig(reason) => reason,
                other => other.to_string(),
            };
            Arc::new(UnconfiguredModel::new(reason))
        }
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %err, "failed to install SIGTERM handler");
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
