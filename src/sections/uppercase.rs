//! Uppercase section - checks for an ASCII capital letter.

use secrecy::{ExposeSecret, SecretString};

/// Checks if the password contains at least one letter in `A..=Z`.
pub fn uppercase_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_uppercase())
}
