pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod llm;
pub mod markdown;
pub mod prompt;

use std::sync::Arc;

use config::Config;
use controller::SummarizeController;
use llm::{GeminiClient, TextGenerator};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<SummarizeController>,
}

impl AppState {
    /// Wires the Gemini client from the startup config. The config is only
    /// read here and never changes afterwards.
    pub fn new(config: &Config) -> Self {
        Self::with_generator(Arc::new(GeminiClient::from_config(config)))
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        AppState {
            controller: Arc::new(SummarizeController::new(generator)),
        }
    }
}
