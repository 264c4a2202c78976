//! UID session: the identifier plus its load-at-init / save-on-change lifecycle.

use crate::error::BioResult;
use crate::identifier::{Identifier, IdentifierMode};
use crate::storage::{load_persisted_counter, persist_counter, SharedStore};

/// Owns the session identifier and, for sequential mode, its storage slot.
///
/// Every change to a sequential counter is written through to the store
/// before the call returns. Random codes are never written.
pub struct UidSession {
    identifier: Identifier,
    store: SharedStore,
    key: String,
}

impl UidSession {
    /// Open a session, restoring the counter from `store` or rolling a code.
    pub fn open(mode: IdentifierMode, store: SharedStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let identifier = match mode {
            IdentifierMode::Sequential => {
                Identifier::Sequential(load_persisted_counter(store.as_ref(), &key))
            }
            IdentifierMode::Random => Identifier::random(),
        };
        tracing::debug!(mode = mode.as_str(), uid = %identifier, "Opened UID session");

        Self {
            identifier,
            store,
            key,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn mode(&self) -> IdentifierMode {
        self.identifier.mode()
    }

    /// Formatted UID, e.g. `#0003`.
    pub fn display(&self) -> String {
        self.identifier.display()
    }

    /// Step forward and persist. No-op for random codes.
    ///
    /// On a persist error the in-memory value has already moved; the error
    /// is returned so the caller can decide whether to surface it.
    pub fn increment(&mut self) -> BioResult<()> {
        if self.identifier.increment() {
            self.save()?;
        }
        Ok(())
    }

    /// Step backward and persist. No-op for random codes.
    pub fn decrement(&mut self) -> BioResult<()> {
        if self.identifier.decrement() {
            self.save()?;
        }
        Ok(())
    }

    fn save(&self) -> BioResult<()> {
        match self.identifier.counter() {
            Some(n) => persist_counter(self.store.as_ref(), &self.key, n),
            None => Ok(()),
        }
    }
}
