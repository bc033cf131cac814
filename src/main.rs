use clap::Parser;
use passvault::cli::frontend::TerminalFrontend;
use passvault::cli::{controller, output, Cli};
use passvault::errors::Result;
use passvault::logging;
use passvault::vault::VaultStore;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;
    logging::init_logging(&logging::filter_directive(
        &settings.log_level,
        cli.verbose,
    ))?;

    let store = VaultStore::new(cli.vault_path(&settings)?, settings.argon2_params());

    if !cli.no_banner {
        output::banner();
    }

    let mut frontend = TerminalFrontend::new();
    controller::run(&mut frontend, store)
}
