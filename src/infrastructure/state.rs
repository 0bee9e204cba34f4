//! Application state containing the registry service and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::services::{RegistryObserver, TeacherService, TracingObserver};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Registry service
    pub teacher_service: TeacherService,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState reporting registry events through `tracing`
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self::with_observer(db, config, Arc::new(TracingObserver))
    }

    pub fn with_observer(
        db: DatabaseConnection,
        config: Config,
        observer: Arc<dyn RegistryObserver>,
    ) -> Self {
        let teacher_service = TeacherService::new(db.clone(), observer);

        Self {
            db,
            teacher_service,
            config: Arc::new(config),
        }
    }
}

// Allow extracting DatabaseConnection from AppState
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
