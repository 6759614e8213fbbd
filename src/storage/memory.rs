//! In-memory state store
//!
//! Stands in for a remote per-user backend in tests and examples; blobs live
//! only as long as the store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::AppState;

use super::{Scope, StateStore};

/// A `StateStore` keeping blobs in a map keyed by scope
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, AppState>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, scope: &Scope) -> SpendbookResult<Option<AppState>> {
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| SpendbookError::Storage("memory store lock poisoned".into()))?;
        Ok(blobs.get(&scope.key()).cloned())
    }

    fn save(&self, scope: &Scope, state: &AppState) -> SpendbookResult<()> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| SpendbookError::Storage("memory store lock poisoned".into()))?;
        blobs.insert(scope.key(), state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.load(&Scope::Device).unwrap().is_none());
    }

    #[test]
    fn test_save_load_per_scope() {
        let store = MemoryStore::new();

        let mut state = AppState::default();
        state.currency = "USD".into();
        store.save(&Scope::User("u1".into()), &state).unwrap();

        assert!(store.load(&Scope::Device).unwrap().is_none());
        let loaded = store.load(&Scope::User("u1".into())).unwrap().unwrap();
        assert_eq!(loaded.currency, "USD");
    }

    #[test]
    fn test_last_writer_wins() {
        let store = MemoryStore::new();
        let scope = Scope::Device;

        store.save(&scope, &AppState::default()).unwrap();
        let mut second = AppState::default();
        second.currency = "EUR".into();
        store.save(&scope, &second).unwrap();

        assert_eq!(store.load(&scope).unwrap().unwrap().currency, "EUR");
    }
}
