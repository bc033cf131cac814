//! Vault module — encrypted secret storage.
//!
//! This module provides:
//! - `Tag` and `SecretRecord` types (`record`)
//! - The tag-unique, insertion-ordered `RecordDirectory` (`directory`)
//! - `VaultStore` for initializing, loading and saving the vault file (`store`)

pub mod directory;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use directory::RecordDirectory;
pub use record::{SecretRecord, Tag};
pub use store::VaultStore;
