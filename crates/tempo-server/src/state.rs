use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tempo_core::storage::Store;

/// Shared application state.
///
/// The store sits behind a single mutex, serializing all writes
/// process-wide. That subsumes the required per-user write ordering and
/// keeps concurrent streak updates from losing each other.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Store>>,
    jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(store: Store, jwt_secret: String) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Lock the store. Guards are never held across an await point.
    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}
