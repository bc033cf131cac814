//! Colored terminal output helpers.
//!
//! All user-facing status lines go through these functions so we get
//! consistent styling across every operation.

use console::style;

/// Print the startup banner.
pub fn banner() {
    println!();
    println!("  {}", style("Password Manager").blue().bold());
    println!("  {}", style("\u{2500}".repeat(16)).blue());
    println!();
}

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}
