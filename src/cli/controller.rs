//! Session controller: passphrase setup or unlock, then the menu loop.
//!
//! ```text
//! NoVault -> CreatingMasterPassword -> Unlocked <-> (add | search | delete) -> Exited
//!            Authenticating ---------^
//! ```
//!
//! Each state owns what it needs: the store before unlock, the session after.

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::commands;
use crate::cli::frontend::{Frontend, MenuChoice, Notice};
use crate::errors::{Result, VaultError};
use crate::password;
use crate::session::Session;
use crate::vault::VaultStore;

/// Controller state.
pub enum State {
    /// No vault file on disk yet.
    NoVault(VaultStore),
    /// Collecting a new master password.
    CreatingMasterPassword(VaultStore),
    /// A vault exists and is waiting for its master password.
    Authenticating(VaultStore),
    /// Unlocked; the menu loop runs against this session.
    Unlocked(Session),
    Exited,
}

impl State {
    /// Initial state for `store`.
    pub fn start(store: VaultStore) -> Self {
        if store.exists() {
            Self::Authenticating(store)
        } else {
            Self::NoVault(store)
        }
    }
}

/// Run a whole session until the user exits.
///
/// Errors returned from here are fatal: failing to create the vault,
/// I/O failures while unlocking, or a prompt that can no longer read input.
pub fn run<F: Frontend>(frontend: &mut F, store: VaultStore) -> Result<()> {
    let mut state = State::start(store);
    loop {
        state = match state {
            State::NoVault(store) => {
                frontend.notify(Notice::Info, "No vault found. Let's create one.");
                State::CreatingMasterPassword(store)
            }
            State::CreatingMasterPassword(store) => {
                let passphrase = create_master_password(frontend)?;
                let session = Session::create(store, passphrase)?;
                frontend.notify(Notice::Success, "Vault created.");
                State::Unlocked(session)
            }
            State::Authenticating(store) => authenticate(frontend, store)?,
            State::Unlocked(mut session) => match frontend.menu()? {
                MenuChoice::Exit => State::Exited,
                choice => {
                    if let Err(e) = dispatch(choice, &mut session, frontend) {
                        if !e.is_recoverable() {
                            return Err(e);
                        }
                        frontend.notify(Notice::Error, &e.to_string());
                    }
                    State::Unlocked(session)
                }
            },
            State::Exited => return Ok(()),
        };
    }
}

fn dispatch<F: Frontend>(choice: MenuChoice, session: &mut Session, frontend: &mut F) -> Result<()> {
    match choice {
        MenuChoice::Add => commands::add::execute(session, frontend),
        MenuChoice::Search => commands::search::execute(session, frontend),
        MenuChoice::Delete => commands::delete::execute(session, frontend),
        MenuChoice::Exit => Ok(()),
    }
}

/// Ask for a new master password until it meets the policy and is
/// entered identically twice.  There is no attempt limit.
fn create_master_password<F: Frontend>(frontend: &mut F) -> Result<Zeroizing<String>> {
    loop {
        let first = frontend.passphrase("Create a master password")?;
        if let Err(e) = password::check_complexity(&first) {
            frontend.notify(Notice::Warning, &e.to_string());
            continue;
        }

        let second = frontend.passphrase("Confirm master password")?;
        if first.as_str() != second.as_str() {
            frontend.notify(Notice::Warning, &VaultError::PasswordMismatch.to_string());
            continue;
        }

        return Ok(first);
    }
}

/// One unlock attempt.  A wrong passphrase returns to `Authenticating`;
/// there is no lockout.
fn authenticate<F: Frontend>(frontend: &mut F, store: VaultStore) -> Result<State> {
    let passphrase = frontend.passphrase("Enter your master password")?;

    match store.load(passphrase.as_bytes()) {
        Ok(directory) => {
            frontend.notify(
                Notice::Success,
                &format!("Vault unlocked ({} passwords).", directory.len()),
            );
            Ok(State::Unlocked(Session::from_parts(
                store, passphrase, directory,
            )))
        }
        Err(VaultError::VaultUnlock) => {
            debug!("unlock attempt rejected");
            frontend.notify(Notice::Error, "Wrong master password. Try again.");
            Ok(State::Authenticating(store))
        }
        Err(e) => Err(e),
    }
}
