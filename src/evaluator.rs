//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::RuleVector;
use crate::strength::{Classification, PasswordEvaluation, Strength};

/// Evaluates the composition rules and returns both the strength bucket
/// and the per-rule vector.
///
/// Total over every input: never fails and keeps no state between calls.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let rules = RuleVector::check(password);
    let strength = Strength::classify(password.expose_secret().is_empty(), rules.count());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: {:?} ({} of 4 rules)",
        strength,
        rules.count()
    );

    PasswordEvaluation { strength, rules }
}

/// Returns the `{score, label, color}` classification for the password.
pub fn evaluate(password: &SecretString) -> Classification {
    evaluate_password_strength(password).classification()
}

/// Returns the raw satisfaction of each rule, in display order.
///
/// Computed straight from the sections; an empty password is not special
/// cased here.
pub fn rule_vector(password: &SecretString) -> RuleVector {
    RuleVector::check(password)
}
