//! Application state.

use sentimento_core::AnalysisService;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(service: AnalysisService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
