//! Password strength meter library
//!
//! This library scores a password against four composition rules
//! (length, uppercase, digit, special character) and maps the result to a
//! `Weak`/`Fair`/`Good`/`Strong` label, a color and a progress score, plus
//! a checklist of which rules are met.
//!
//! # Features
//!
//! - `async` (default): Enables debounced live evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_DEBOUNCE_MS`: Debounce delay for live evaluation
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate, rule_vector};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1!".to_string().into());
//!
//! let classification = evaluate(&password);
//! assert_eq!(classification.label, "Strong");
//! assert_eq!(classification.color, "#23d160");
//! assert_eq!(rule_vector(&password).0, [true, true, true, true]);
//! ```

// Internal modules
mod config;
mod evaluator;
mod field;
#[cfg(feature = "async")]
mod live;
mod sections;
mod strength;

// Public API
pub use config::{ConfigError, LiveConfig, DEBOUNCE_ENV, DEFAULT_DEBOUNCE};
pub use evaluator::{evaluate, evaluate_password_strength, rule_vector};
pub use field::{
    PasswordField, StrengthMeter, SuggestionChip, CHIP_SATISFIED_COLOR, CHIP_UNMET_COLOR, MASK_CHAR,
};
pub use sections::{Rule, RuleVector, MIN_LENGTH, RULE_COUNT};
pub use strength::{Classification, PasswordEvaluation, Strength};

#[cfg(feature = "async")]
pub use live::{evaluate_password_strength_tx, LiveEvaluator};
