//! Special character section.

use secrecy::{ExposeSecret, SecretString};

/// Checks if the password contains a special character.
///
/// Anything that is not an ASCII letter or digit is special. This includes
/// the underscore, whitespace and every non-ASCII character.
pub fn special_section(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
}
