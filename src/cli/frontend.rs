//! The presentation side of a session.
//!
//! The controller and commands only talk to a `Frontend`; the terminal
//! implementation uses dialoguer prompts, console styling and the system
//! clipboard.  Tests drive the same flow with a scripted frontend.

use console::style;
use dialoguer::{Confirm, Input, Password, Select};
use zeroize::Zeroizing;

use crate::cli::clipboard::SystemClipboard;
use crate::cli::output;
use crate::errors::{Result, VaultError};
use crate::vault::Tag;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [Self::Add, Self::Search, Self::Delete, Self::Exit];

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add new password",
            Self::Search => "Search for password",
            Self::Delete => "Delete password",
            Self::Exit => "Exit",
        }
    }
}

/// Where a new record's secret comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    Generate,
    Supply,
}

/// What to do with a revealed secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    CopyToClipboard,
    Show,
}

/// Severity of a status line shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Info,
    Warning,
    Error,
}

/// Everything a session needs from the user and the screen.
pub trait Frontend {
    fn menu(&mut self) -> Result<MenuChoice>;

    /// Masked passphrase input.
    fn passphrase(&mut self, prompt: &str) -> Result<Zeroizing<String>>;

    /// Raw tag input; validation happens in the caller.
    fn tag(&mut self) -> Result<String>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    fn secret_source(&mut self) -> Result<SecretSource>;

    /// Masked input for a user-supplied record secret.
    fn secret(&mut self) -> Result<Zeroizing<String>>;

    fn reveal_action(&mut self) -> Result<RevealAction>;

    fn copy_to_clipboard(&mut self, secret: &str) -> Result<()>;

    fn show_secret(&mut self, secret: &str);

    fn notify(&mut self, notice: Notice, message: &str);
}

/// Interactive terminal frontend.
#[derive(Default)]
pub struct TerminalFrontend {
    clipboard: SystemClipboard,
}

impl TerminalFrontend {
    pub fn new() -> Self {
        Self::default()
    }
}

fn prompt_failed(e: dialoguer::Error) -> VaultError {
    VaultError::PromptFailed(e.to_string())
}

impl Frontend for TerminalFrontend {
    fn menu(&mut self) -> Result<MenuChoice> {
        let labels = MenuChoice::ALL.map(MenuChoice::label);
        let index = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_failed)?;
        Ok(MenuChoice::ALL[index])
    }

    fn passphrase(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        let pw = Password::new()
            .with_prompt(prompt)
            .interact()
            .map_err(prompt_failed)?;
        Ok(Zeroizing::new(pw))
    }

    fn tag(&mut self) -> Result<String> {
        Input::<String>::new()
            .with_prompt("Enter the password tag")
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                Tag::parse(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_failed)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_failed)
    }

    fn secret_source(&mut self) -> Result<SecretSource> {
        let index = Select::new()
            .with_prompt("Do you want to generate a password or enter your own?")
            .items(&["Generate password", "Enter my own"])
            .default(0)
            .interact()
            .map_err(prompt_failed)?;
        Ok(if index == 0 {
            SecretSource::Generate
        } else {
            SecretSource::Supply
        })
    }

    fn secret(&mut self) -> Result<Zeroizing<String>> {
        self.passphrase("Enter your password")
    }

    fn reveal_action(&mut self) -> Result<RevealAction> {
        let index = Select::new()
            .with_prompt("Password found. What would you like to do with it?")
            .items(&["Copy to clipboard", "Show on screen"])
            .default(0)
            .interact()
            .map_err(prompt_failed)?;
        Ok(if index == 0 {
            RevealAction::CopyToClipboard
        } else {
            RevealAction::Show
        })
    }

    fn copy_to_clipboard(&mut self, secret: &str) -> Result<()> {
        self.clipboard.copy(secret)
    }

    fn show_secret(&mut self, secret: &str) {
        println!("{}", style(secret).green());
    }

    fn notify(&mut self, notice: Notice, message: &str) {
        match notice {
            Notice::Success => output::success(message),
            Notice::Info => output::info(message),
            Notice::Warning => output::warning(message),
            Notice::Error => output::error(message),
        }
    }
}
