//! Application state for API handlers

use std::sync::Arc;
use vigil_vision::VisionModel;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Generation capability used by the emotion endpoint
    pub model: Arc<dyn VisionModel>,

    /// Gateway version
    pub version: String,
}

impl AppState {
    /// Create new application state
    pub fn new(model: Arc<dyn VisionModel>) -> Self {
        Self {
            model,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("model", &self.model.name())
            .field("version", &self.version)
            .finish()
    }
}
