//! Password complexity policy and random password generation.
//!
//! The same policy applies to the master password at creation time and to
//! user-supplied record secrets.

use rand::Rng;
use zeroize::Zeroizing;

use crate::errors::{Result, VaultError};

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Symbols that satisfy the "one special character" rule.
pub const SYMBOLS: &str = "!@#$%^&*()_+";

/// Characters a generated password is drawn from.
pub const GENERATOR_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+";

/// Inclusive length range of generated passwords.
pub const GENERATED_LEN: std::ops::RangeInclusive<usize> = 16..=25;

/// Check `candidate` against the complexity policy.
///
/// Requires at least eight characters including an ASCII letter, an ASCII
/// digit and one of `SYMBOLS`.
pub fn check_complexity(candidate: &str) -> Result<()> {
    if candidate.is_empty() {
        return Err(VaultError::WeakPassword("Password cannot be empty.".into()));
    }

    let long_enough = candidate.chars().count() >= MIN_PASSWORD_LEN;
    let has_letter = candidate.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = candidate.chars().any(|c| c.is_ascii_digit());
    let has_symbol = candidate.chars().any(|c| SYMBOLS.contains(c));

    if long_enough && has_letter && has_digit && has_symbol {
        Ok(())
    } else {
        Err(VaultError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long and contain at least \
             one letter, one number and one special character ({SYMBOLS})."
        )))
    }
}

/// Generate a random password from `GENERATOR_ALPHABET`.
///
/// The length is uniform over `GENERATED_LEN` and each character is
/// uniform over the alphabet.  The thread RNG is a CSPRNG.
pub fn generate() -> Zeroizing<String> {
    let mut rng = rand::rng();
    let alphabet = GENERATOR_ALPHABET.as_bytes();
    let len = rng.random_range(GENERATED_LEN);

    let mut password = Zeroizing::new(String::with_capacity(len));
    for _ in 0..len {
        let index = rng.random_range(0..alphabet.len());
        password.push(char::from(alphabet[index]));
    }
    password
}
