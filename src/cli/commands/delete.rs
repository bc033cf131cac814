//! Delete password — remove a record by tag.

use crate::cli::frontend::{Frontend, Notice};
use crate::errors::Result;
use crate::session::Session;
use crate::vault::Tag;

/// Execute the delete operation.
pub fn execute<F: Frontend>(session: &mut Session, frontend: &mut F) -> Result<()> {
    let tag = Tag::parse(&frontend.tag()?)?;

    if !session.contains(&tag) {
        frontend.notify(Notice::Error, &format!("Password tag '{tag}' not found!"));
        return Ok(());
    }

    if !frontend.confirm(&format!("Delete password '{tag}'?"), false)? {
        frontend.notify(Notice::Info, "Cancelled.");
        return Ok(());
    }

    session.delete(&tag)?;
    frontend.notify(Notice::Success, &format!("Password '{tag}' deleted."));
    Ok(())
}
