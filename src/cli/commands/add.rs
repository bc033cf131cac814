//! Add new password — store a generated or supplied secret under a tag.

use zeroize::Zeroizing;

use crate::cli::frontend::{Frontend, Notice, SecretSource};
use crate::errors::{Result, VaultError};
use crate::password;
use crate::session::Session;
use crate::vault::Tag;

/// Execute the add operation.
pub fn execute<F: Frontend>(session: &mut Session, frontend: &mut F) -> Result<()> {
    let tag = Tag::parse(&frontend.tag()?)?;

    // An existing tag is only replaced on explicit confirmation.
    let overwrite = if session.contains(&tag) {
        let confirmed = frontend.confirm(
            &format!("Password tag '{tag}' already exists. Overwrite it?"),
            false,
        )?;
        if !confirmed {
            return Err(VaultError::DuplicateTag(tag.to_string()));
        }
        true
    } else {
        false
    };

    let secret = match frontend.secret_source()? {
        SecretSource::Generate => {
            let generated = password::generate();
            frontend.notify(
                Notice::Info,
                &format!("Generated a {}-character password.", generated.len()),
            );
            generated
        }
        SecretSource::Supply => prompt_secret(frontend)?,
    };

    session.add(&tag, &secret, overwrite)?;

    let verb = if overwrite { "updated" } else { "added" };
    frontend.notify(
        Notice::Success,
        &format!(
            "Password '{tag}' {verb} ({} total).",
            session.directory().len()
        ),
    );
    Ok(())
}

/// Ask until the user supplies a secret that meets the complexity policy.
fn prompt_secret<F: Frontend>(frontend: &mut F) -> Result<Zeroizing<String>> {
    loop {
        let secret = frontend.secret()?;
        match password::check_complexity(&secret) {
            Ok(()) => return Ok(secret),
            Err(e) => frontend.notify(Notice::Warning, &e.to_string()),
        }
    }
}
