use std::sync::Arc;
use tokio::sync::Mutex;

use shared_config::AppConfig;

use crate::services::system::HealthSystem;

/// Shared state for the HTTP surface. Every handler takes the one lock
/// around `system` for its whole operation, so admissions are serialized.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub system: Mutex<HealthSystem>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: AppConfig) -> SharedState {
        Self::with_system(config, HealthSystem::new())
    }

    pub fn with_system(config: AppConfig, system: HealthSystem) -> SharedState {
        Arc::new(Self {
            config: Arc::new(config),
            system: Mutex::new(system),
        })
    }
}
