//! Session provider: the storage surface the guard reads from.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard never touches `localStorage` directly. It is handed a
//! `SessionProvider`, which lets the browser build use real storage while
//! SSR and tests use an in-memory store. Login and logout flows write through
//! the same trait.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is hydrate-only; on the server reads report "nothing
//! stored" and writes fail with `StoreError::Unavailable`.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::{Arc, Mutex};

use crate::state::session::{Session, SessionState};

/// `localStorage` key under which the session JSON is persisted.
pub const SESSION_STORAGE_KEY: &str = "ketqua";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("session serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Read/write access to the persisted session value.
pub trait SessionProvider: Send + Sync {
    /// Raw stored text, or `None` when nothing is stored.
    fn read_raw(&self) -> Option<String>;

    /// Replace the stored text.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn write_raw(&self, raw: &str) -> Result<(), StoreError>;

    /// Remove any stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the removal.
    fn clear(&self) -> Result<(), StoreError>;

    /// Read and classify the stored value.
    fn current(&self) -> SessionState {
        SessionState::from_raw(self.read_raw().as_deref())
    }

    /// Serialize and persist `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn store(&self, session: &Session) -> Result<(), StoreError> {
        let raw = serde_json::to_string(session)?;
        self.write_raw(&raw)
    }
}

/// Cheaply clonable handle provided through Leptos context.
#[derive(Clone)]
pub struct SessionHandle(Arc<dyn SessionProvider>);

impl SessionHandle {
    pub fn new(provider: impl SessionProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    /// Handle backed by browser `localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserSessionStore)
    }
}

impl std::ops::Deref for SessionHandle {
    type Target = dyn SessionProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionHandle").finish_non_exhaustive()
    }
}

/// Session persisted in the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionProvider for BrowserSessionStore {
    fn read_raw(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write_raw(&self, raw: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(SESSION_STORAGE_KEY, raw)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
            Err(StoreError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage
                .remove_item(SESSION_STORAGE_KEY)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}

/// Process-local session store for SSR and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw text, which need not be valid JSON.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Mutex::new(Some(raw.into())) }
    }
}

impl SessionProvider for MemorySessionStore {
    fn read_raw(&self) -> Option<String> {
        self.raw.lock().ok()?.clone()
    }

    fn write_raw(&self, raw: &str) -> Result<(), StoreError> {
        let mut slot = self.raw.lock().map_err(|e| StoreError::Write(e.to_string()))?;
        *slot = Some(raw.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self.raw.lock().map_err(|e| StoreError::Write(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}
