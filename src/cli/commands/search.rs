//! Search for password — reveal a stored secret by tag.

use tracing::debug;

use crate::cli::frontend::{Frontend, Notice, RevealAction};
use crate::errors::{Result, VaultError};
use crate::session::Session;
use crate::vault::Tag;

/// Execute the search operation.
///
/// A missing tag is reported to the user, not returned as an error.
pub fn execute<F: Frontend>(session: &Session, frontend: &mut F) -> Result<()> {
    let tag = Tag::parse(&frontend.tag()?)?;

    let secret = match session.reveal(&tag) {
        Ok(secret) => secret,
        Err(VaultError::TagNotFound(_)) => {
            frontend.notify(Notice::Error, &format!("Password tag '{tag}' not found!"));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    match frontend.reveal_action()? {
        RevealAction::CopyToClipboard => match frontend.copy_to_clipboard(&secret) {
            Ok(()) => frontend.notify(Notice::Success, "Password copied to clipboard!"),
            Err(e) => {
                debug!(error = %e, "clipboard copy failed");
                frontend.notify(Notice::Warning, &e.to_string());
                if frontend.confirm("Show the password on screen instead?", false)? {
                    frontend.show_secret(&secret);
                }
            }
        },
        RevealAction::Show => frontend.show_secret(&secret),
    }

    Ok(())
}
