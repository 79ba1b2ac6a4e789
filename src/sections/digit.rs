//! Digit section - checks for an ASCII digit.

use secrecy::{ExposeSecret, SecretString};

/// Checks if the password contains at least one digit in `0..=9`.
pub fn digit_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}
