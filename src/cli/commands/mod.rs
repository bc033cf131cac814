//! Menu operations available on an unlocked vault.

pub mod add;
pub mod delete;
pub mod search;
