use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Record errors ---
    #[error("Invalid tag '{0}' — tags must be non-empty and contain only ASCII letters and digits")]
    InvalidTag(String),

    #[error("Password tag '{0}' already exists")]
    DuplicateTag(String),

    #[error("Password tag '{0}' not found")]
    TagNotFound(String),

    // --- Vault errors ---
    #[error("Unable to unlock vault — wrong master password or corrupted vault file")]
    VaultUnlock,

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong password or corrupted data")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Password errors ---
    #[error("{0}")]
    WeakPassword(String),

    #[error("Password mismatch — passwords do not match")]
    PasswordMismatch,

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- Presentation errors ---
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Prompt failed: {0}")]
    PromptFailed(String),
}

impl VaultError {
    /// Whether the interactive menu loop can report this error and keep going.
    ///
    /// Failed saves are recoverable because a session never commits a
    /// mutation in memory until it has reached disk.  A single record that
    /// fails to decrypt does not end the session either.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidTag(_)
                | Self::DuplicateTag(_)
                | Self::TagNotFound(_)
                | Self::VaultUnlock
                | Self::WeakPassword(_)
                | Self::PasswordMismatch
                | Self::DecryptionFailed
                | Self::SerializationError(_)
                | Self::Clipboard(_)
                | Self::Io(_)
        )
    }
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, VaultError>;
