//! System clipboard access.
//!
//! The `arboard` handle is opened on first use and kept for the rest of
//! the session; on X11 the copied text is only served while it lives.

use arboard::Clipboard;

use crate::errors::{Result, VaultError};

#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn copy(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard = Clipboard::new().map_err(|e| VaultError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(text.to_owned())
                .map_err(|e| VaultError::Clipboard(e.to_string()))?;
        }
        Ok(())
    }
}
