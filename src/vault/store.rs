//! On-disk vault file.
//!
//! `VaultStore` owns the path of the vault file and the Argon2 parameters
//! used for new envelopes.  The file holds a single envelope whose
//! plaintext is the JSON record list, so the whole vault is encrypted and
//! replaced as one unit.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::crypto::{self, Argon2Params};
use crate::errors::{Result, VaultError};

use super::directory::RecordDirectory;
use super::record::SecretRecord;

/// Handle to the vault file.  Holds no key material.
#[derive(Debug, Clone)]
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// KDF parameters for newly sealed envelopes.
    params: Argon2Params,
}

impl VaultStore {
    pub fn new(path: impl Into<PathBuf>, params: Argon2Params) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// Whether a vault is present.  A zero-length file counts as absent.
    pub fn exists(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.is_file() && m.len() > 0)
    }

    /// Write a fresh, empty vault sealed under `passphrase`.
    ///
    /// Refuses to replace a vault that already holds data.
    pub fn initialize(&self, passphrase: &[u8]) -> Result<()> {
        if self.exists() {
            return Err(VaultError::VaultAlreadyExists(self.path.clone()));
        }
        self.save(&RecordDirectory::new(), passphrase)?;
        debug!(path = %self.path.display(), "vault initialized");
        Ok(())
    }

    /// Read, decrypt and parse the vault.
    ///
    /// Anything that prevents a well-formed record list from coming out
    /// (wrong passphrase, corrupt envelope, unexpected JSON, duplicate or
    /// malformed tags) is reported as `VaultError::VaultUnlock`.  Only
    /// failing to read the file is an I/O error.
    pub fn load(&self, passphrase: &[u8]) -> Result<RecordDirectory> {
        let raw = fs::read(&self.path)?;
        let sealed = String::from_utf8(raw).map_err(|_| VaultError::VaultUnlock)?;

        let plaintext = crypto::open(&sealed, passphrase).map_err(|_| VaultError::VaultUnlock)?;
        let records: Vec<SecretRecord> =
            serde_json::from_slice(&plaintext).map_err(|_| VaultError::VaultUnlock)?;
        let directory =
            RecordDirectory::try_from_records(records).map_err(|_| VaultError::VaultUnlock)?;

        debug!(path = %self.path.display(), records = directory.len(), "vault loaded");
        Ok(directory)
    }

    /// Serialize, seal and replace the vault file atomically.
    pub fn save(&self, directory: &RecordDirectory, passphrase: &[u8]) -> Result<()> {
        let json = Zeroizing::new(
            serde_json::to_vec(directory.records())
                .map_err(|e| VaultError::SerializationError(format!("records: {e}")))?,
        );
        let sealed = crypto::seal(&json, passphrase, &self.params)?;

        write_atomic(&self.path, sealed.as_bytes())?;
        debug!(path = %self.path.display(), records = directory.len(), "vault saved");
        Ok(())
    }

    /// Seal a single value with this store's KDF parameters.
    pub fn seal_value(&self, plaintext: &[u8], passphrase: &[u8]) -> Result<String> {
        crypto::seal(plaintext, passphrase, &self.params)
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write `data` to a temp file next to `path`, then rename it over `path`.
///
/// The temp file lives in the same directory so the rename stays on one
/// filesystem and readers never see a half-written vault.  The directory
/// is synced after the rename so the new entry survives a crash.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    let result = write_and_sync(&tmp_path, data).and_then(|()| fs::rename(&tmp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result?;

    sync_dir(parent)?;
    Ok(())
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

fn write_and_sync(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    // Owner-only permissions for the vault file.
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_atomic_replaces_the_file_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("passwords");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn parent_directory_can_be_synced() {
        let dir = TempDir::new().unwrap();
        sync_dir(dir.path()).unwrap();
    }

    #[test]
    fn write_atomic_fails_when_the_directory_is_gone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("passwords");
        assert!(matches!(write_atomic(&path, b"data"), Err(VaultError::Io(_))));
    }
}
