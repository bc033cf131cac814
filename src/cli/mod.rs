//! CLI module — Clap argument parser, presentation layer and the
//! interactive session controller.

pub mod clipboard;
pub mod commands;
pub mod controller;
pub mod frontend;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::errors::{Result, VaultError};

/// PassVault: an encrypted password vault for the terminal.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Encrypted password vault for the terminal",
    version
)]
pub struct Cli {
    /// Vault file (default: ./passwords, or `vault_file` from .passvault.toml)
    #[arg(long)]
    pub vault: Option<PathBuf>,

    /// Config file (default: ./.passvault.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    /// Load settings from `--config`, or from the working directory.
    ///
    /// An explicit `--config` path must exist.
    pub fn settings(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(VaultError::ConfigError(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Settings::load_file(path)
            }
            None => Settings::load(&std::env::current_dir()?),
        }
    }

    /// Resolve the vault file: `--vault` wins over the config file.
    pub fn vault_path(&self, settings: &Settings) -> Result<PathBuf> {
        match &self.vault {
            Some(path) => Ok(path.clone()),
            None => Ok(settings.vault_path(&std::env::current_dir()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["passvault", "--vault", "/tmp/v", "-vv", "--no-banner"]);
        assert_eq!(cli.vault, Some(PathBuf::from("/tmp/v")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_banner);
        assert!(cli.config.is_none());
    }

    #[test]
    fn vault_flag_overrides_settings() {
        let cli = Cli::parse_from(["passvault", "--vault", "elsewhere"]);
        let path = cli.vault_path(&Settings::default()).unwrap();
        assert_eq!(path, PathBuf::from("elsewhere"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = Cli::parse_from(["passvault", "--config", "/definitely/not/here.toml"]);
        assert!(matches!(cli.settings(), Err(VaultError::ConfigError(_))));
    }
}
