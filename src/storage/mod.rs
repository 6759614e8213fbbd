//! Persistence layer for spendbook
//!
//! The core persists one state blob per scope through the [`StateStore`]
//! contract. [`StoreRouter`] picks the backing store for the active scope
//! and falls back from remote to local on failure.

pub mod local;
pub mod memory;

pub use local::LocalStore;
pub use memory::MemoryStore;

use log::warn;

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::AppState;

/// The persistence partition currently active
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Device-local data, used while signed out
    Device,
    /// Data belonging to an authenticated user
    User(String),
}

impl Scope {
    /// Stable key for this scope, safe to use as a file name
    pub fn key(&self) -> String {
        match self {
            Scope::Device => "device".to_string(),
            Scope::User(uid) => {
                let sanitized: String = uid
                    .chars()
                    .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
                    .collect();
                format!("user-{}", sanitized)
            }
        }
    }
}

/// Contract the core requires from a persistence backend
///
/// Implementations load and save whole blobs; partial writes are not part of
/// the contract.
pub trait StateStore {
    /// Load the blob for a scope, or `None` if the scope has never saved
    fn load(&self, scope: &Scope) -> SpendbookResult<Option<AppState>>;

    /// Save the blob for a scope
    fn save(&self, scope: &Scope, state: &AppState) -> SpendbookResult<()>;
}

/// Routes persistence calls to the right backend for the active scope
///
/// `Device` scope always uses the local store. `User` scopes use the remote
/// store when one is configured; a failing remote falls back to local for
/// best-effort durability, and only a failure of both surfaces as an error.
pub struct StoreRouter {
    local: LocalStore,
    remote: Option<Box<dyn StateStore>>,
}

impl StoreRouter {
    /// A router with no remote backend
    pub fn local_only(local: LocalStore) -> Self {
        Self {
            local,
            remote: None,
        }
    }

    /// A router that sends user-scoped traffic to a remote store
    pub fn with_remote(local: LocalStore, remote: Box<dyn StateStore>) -> Self {
        Self {
            local,
            remote: Some(remote),
        }
    }

    /// Load the blob for a scope
    pub fn load(&self, scope: &Scope) -> SpendbookResult<Option<AppState>> {
        match (scope, &self.remote) {
            (Scope::User(_), Some(remote)) => match remote.load(scope) {
                Ok(blob) => Ok(blob),
                Err(err) => {
                    warn!("remote load failed for {}: {}; using local copy", scope.key(), err);
                    self.local.load(scope)
                }
            },
            _ => self.local.load(scope),
        }
    }

    /// Save the blob for a scope
    pub fn save(&self, scope: &Scope, state: &AppState) -> SpendbookResult<()> {
        match (scope, &self.remote) {
            (Scope::User(_), Some(remote)) => match remote.save(scope, state) {
                Ok(()) => Ok(()),
                Err(remote_err) => {
                    warn!(
                        "remote save failed for {}: {}; falling back to local",
                        scope.key(),
                        remote_err
                    );
                    self.local.save(scope, state).map_err(|local_err| {
                        SpendbookError::Persistence(format!(
                            "remote save failed ({}); local fallback failed ({})",
                            remote_err, local_err
                        ))
                    })
                }
            },
            _ => self.local.save(scope, state),
        }
    }
}
