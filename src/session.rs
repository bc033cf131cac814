//! Unlocked session context.
//!
//! A `Session` bundles the vault store, the master passphrase and the
//! hydrated record directory.  Every operation takes the session
//! explicitly; nothing about an unlocked vault lives in global state.

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::errors::{Result, VaultError};
use crate::password;
use crate::vault::{RecordDirectory, Tag, VaultStore};

/// An unlocked vault.
///
/// The passphrase is wiped from memory when the session is dropped.
pub struct Session {
    store: VaultStore,
    passphrase: Zeroizing<String>,
    directory: RecordDirectory,
}

impl Session {
    /// Create a new, empty vault protected by `passphrase`.
    ///
    /// The passphrase must satisfy the complexity policy.
    pub fn create(store: VaultStore, passphrase: Zeroizing<String>) -> Result<Self> {
        password::check_complexity(&passphrase)?;
        store.initialize(passphrase.as_bytes())?;
        info!(path = %store.path().display(), "created new vault");

        Ok(Self {
            store,
            passphrase,
            directory: RecordDirectory::new(),
        })
    }

    /// Unlock an existing vault.  Only correctness of the passphrase is
    /// checked here, not the complexity policy.
    pub fn unlock(store: VaultStore, passphrase: Zeroizing<String>) -> Result<Self> {
        let directory = store.load(passphrase.as_bytes())?;
        Ok(Self::from_parts(store, passphrase, directory))
    }

    /// Assemble a session from an already-loaded directory.
    pub fn from_parts(
        store: VaultStore,
        passphrase: Zeroizing<String>,
        directory: RecordDirectory,
    ) -> Self {
        info!(records = directory.len(), "vault unlocked");
        Self {
            store,
            passphrase,
            directory,
        }
    }

    /// Seal `secret` and store it under `tag`, then persist.
    ///
    /// An existing tag fails with `DuplicateTag` unless `overwrite` is set.
    pub fn add(&mut self, tag: &Tag, secret: &str, overwrite: bool) -> Result<()> {
        if self.directory.contains(tag) && !overwrite {
            return Err(VaultError::DuplicateTag(tag.to_string()));
        }

        let ciphertext = self
            .store
            .seal_value(secret.as_bytes(), self.passphrase.as_bytes())?;

        let mut next = self.directory.clone();
        next.add(tag.clone(), ciphertext, overwrite)?;
        self.commit(next)?;

        debug!(tag = %tag, overwrite, "record added");
        Ok(())
    }

    /// Decrypt the secret stored under `tag`.
    pub fn reveal(&self, tag: &Tag) -> Result<Zeroizing<String>> {
        let record = self.directory.get(tag)?;
        let bytes = crate::crypto::open(&record.ciphertext, self.passphrase.as_bytes())?;

        let text = std::str::from_utf8(&bytes)
            .map_err(|_| VaultError::SerializationError("secret value is not valid UTF-8".into()))?;
        Ok(Zeroizing::new(text.to_string()))
    }

    /// Remove the record stored under `tag`, then persist.
    pub fn delete(&mut self, tag: &Tag) -> Result<()> {
        let mut next = self.directory.clone();
        next.remove(tag)?;
        self.commit(next)?;

        debug!(tag = %tag, "record deleted");
        Ok(())
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.directory.contains(tag)
    }

    /// Tags in insertion order.
    pub fn tags(&self) -> Vec<&Tag> {
        self.directory.tags()
    }

    pub fn directory(&self) -> &RecordDirectory {
        &self.directory
    }

    /// Persist `next` and adopt it only once it is on disk, so a failed
    /// save leaves memory and file in agreement.
    fn commit(&mut self, next: RecordDirectory) -> Result<()> {
        self.store.save(&next, self.passphrase.as_bytes())?;
        self.directory = next;
        Ok(())
    }
}
