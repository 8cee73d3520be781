//! Storage for the language model API key.

use parking_lot::RwLock;
use std::fmt;

/// Single-slot holder for the active language model credential.
///
/// Reads and writes are individually atomic; concurrent submissions resolve
/// as last-writer-wins.
#[derive(Default)]
pub struct CredentialStore {
    slot: RwLock<Option<String>>,
}

impl CredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the active credential, if one has been set.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.slot.read().clone()
    }

    /// Replaces the active credential.
    pub fn set(&self, api_key: impl Into<String>) {
        *self.slot.write() = Some(api_key.into());
    }

    /// Whether a credential is currently held.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.slot.read().is_some()
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("is_set", &self.is_set())
            .finish()
    }
}
