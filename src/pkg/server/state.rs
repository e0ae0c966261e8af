use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{conf::settings, pkg::internal::store::JobStore};

/// Owner of the job collection for the lifetime of the process. Handlers
/// reach the store only through here.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<RwLock<JobStore>>,
}

impl AppState {
    pub fn new() -> AppState {
        AppState::with_store(AppState::initial_store())
    }

    pub fn with_store(store: JobStore) -> AppState {
        AppState {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn initial_store() -> JobStore {
        if settings.seed_sample {
            JobStore::seeded()
        } else {
            JobStore::new()
        }
    }
}
