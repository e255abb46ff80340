use std::sync::Arc;

use crate::config::Config;
use crate::session::{FormController, SessionRegistry};
use crate::storage::{JsonFileStore, RecordStore};
use axum::extract::FromRef;
use chrono::TimeDelta;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionRegistry,
    pub controller: FormController,
}

impl AppState {
    /// State backed by JSON files under `config.data_dir`.
    pub fn new(config: Config) -> Self {
        let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(&config.data_dir));
        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: Arc<dyn RecordStore>) -> Self {
        let idle = TimeDelta::minutes(i64::from(config.session_idle_minutes));
        Self {
            sessions: SessionRegistry::new(idle),
            controller: FormController::new(store),
        }
    }
}

impl FromRef<AppState> for SessionRegistry {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for FormController {
    fn from_ref(state: &AppState) -> Self {
        state.controller.clone()
    }
}
