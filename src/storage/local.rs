//! Device-local JSON blob storage
//!
//! One file per scope under the data directory, written atomically
//! (temp file then rename) so a crash mid-write never corrupts the blob.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::config::SpendbookPaths;
use crate::error::{SpendbookError, SpendbookResult};
use crate::models::AppState;

use super::{Scope, StateStore};

/// File-backed state store
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    /// Create a local store, ensuring the data directory exists
    pub fn new(paths: &SpendbookPaths) -> SpendbookResult<Self> {
        paths.ensure_directories()?;
        Ok(Self {
            data_dir: paths.data_dir(),
        })
    }

    /// Path of the blob file for a scope
    pub fn blob_path(&self, scope: &Scope) -> PathBuf {
        self.data_dir.join(format!("{}.json", scope.key()))
    }
}

impl StateStore for LocalStore {
    fn load(&self, scope: &Scope) -> SpendbookResult<Option<AppState>> {
        let path = self.blob_path(scope);
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path).map_err(|e| {
            SpendbookError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let state = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            SpendbookError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Some(state))
    }

    fn save(&self, scope: &Scope, state: &AppState) -> SpendbookResult<()> {
        let path = self.blob_path(scope);

        // temp file in the same directory so the rename stays atomic
        let temp_path = path.with_extension("json.tmp");
        let file = File::create(&temp_path)
            .map_err(|e| SpendbookError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, state)
            .map_err(|e| SpendbookError::Storage(format!("Failed to serialize state: {}", e)))?;
        writer
            .flush()
            .map_err(|e| SpendbookError::Storage(format!("Failed to flush state: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| SpendbookError::Storage(format!("Failed to sync state: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SpendbookError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> LocalStore {
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        LocalStore::new(&paths).unwrap()
    }

    #[test]
    fn test_missing_blob_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        assert!(store.load(&Scope::Device).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let mut state = AppState::default();
        state.currency = "USD".into();
        state.balance.adjust(Money::from_units(42));

        store.save(&Scope::Device, &state).unwrap();
        let loaded = store.load(&Scope::Device).unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_scopes_are_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let mut device_state = AppState::default();
        device_state.currency = "EUR".into();
        store.save(&Scope::Device, &device_state).unwrap();

        let user_scope = Scope::User("u1".into());
        assert!(store.load(&user_scope).unwrap().is_none());

        store.save(&user_scope, &AppState::default()).unwrap();
        assert_eq!(store.load(&Scope::Device).unwrap().unwrap().currency, "EUR");
        assert_eq!(store.load(&user_scope).unwrap().unwrap().currency, "INR");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.save(&Scope::Device, &AppState::default()).unwrap();

        let blob = store.blob_path(&Scope::Device);
        assert!(blob.exists());
        assert!(!blob.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_overwrite_replaces_blob() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.save(&Scope::Device, &AppState::default()).unwrap();

        let mut updated = AppState::default();
        updated.currency = "GBP".into();
        store.save(&Scope::Device, &updated).unwrap();

        assert_eq!(store.load(&Scope::Device).unwrap().unwrap().currency, "GBP");
    }
}
