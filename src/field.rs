//! Password field state and the view data derived from it.
//!
//! Holds what the input widget owns (the text and the visibility flag) and
//! derives the meter and checklist from a fresh evaluation on every read.
//! No rendering happens here.

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate_password_strength;
use crate::sections::{Rule, RULE_COUNT};
use crate::strength::PasswordEvaluation;

/// Character shown in place of each hidden character.
pub const MASK_CHAR: char = '•';

/// Accent color of a satisfied suggestion chip.
pub const CHIP_SATISFIED_COLOR: &str = "#23d160";

/// Text color of an unmet suggestion chip.
pub const CHIP_UNMET_COLOR: &str = "#eee";

/// Progress bar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthMeter {
    /// Width of the filled part, 0 to 100.
    pub fill_percent: u8,
    pub label: &'static str,
    pub color: &'static str,
}

/// One entry of the suggestion checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionChip {
    pub rule: Rule,
    pub text: &'static str,
    pub satisfied: bool,
}

impl SuggestionChip {
    pub fn color(&self) -> &'static str {
        if self.satisfied {
            CHIP_SATISFIED_COLOR
        } else {
            CHIP_UNMET_COLOR
        }
    }
}

/// State of the password input: current text and visibility toggle.
#[derive(Debug)]
pub struct PasswordField {
    password: SecretString,
    visible: bool,
}

impl Default for PasswordField {
    fn default() -> Self {
        Self {
            password: SecretString::new(String::new().into()),
            visible: false,
        }
    }
}

impl PasswordField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current text.
    pub fn set_password(&mut self, password: SecretString) {
        self.password = password;
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flips between clear and masked display. Evaluation is unaffected.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Accessible label for the visibility button.
    pub fn toggle_label(&self) -> &'static str {
        if self.visible {
            "Hide password"
        } else {
            "Show password"
        }
    }

    /// Text to put in the input: the password itself, or one mask
    /// character per char when hidden.
    pub fn display_text(&self) -> String {
        let pwd = self.password.expose_secret();
        if self.visible {
            pwd.to_string()
        } else {
            pwd.chars().map(|_| MASK_CHAR).collect()
        }
    }

    pub fn evaluation(&self) -> PasswordEvaluation {
        evaluate_password_strength(&self.password)
    }

    pub fn meter(&self) -> StrengthMeter {
        let evaluation = self.evaluation();
        let classification = evaluation.classification();
        StrengthMeter {
            fill_percent: evaluation.fill_percent(),
            label: classification.label,
            color: classification.color,
        }
    }

    pub fn checklist(&self) -> [SuggestionChip; RULE_COUNT] {
        let rules = self.evaluation().rules;
        Rule::ALL.map(|rule| SuggestionChip {
            rule,
            text: rule.suggestion(),
            satisfied: rules.is_satisfied(rule),
        })
    }
}
