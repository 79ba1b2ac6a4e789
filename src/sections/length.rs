//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// Length is counted in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
pub fn length_section(password: &SecretString) -> bool {
    password.expose_secret().encode_utf16().count() >= MIN_LENGTH
}
