//! Password composition sections
//!
//! Each section checks one composition rule. Sections are independent of
//! each other and of whether the password is empty.

mod digit;
mod length;
mod special;
mod uppercase;

pub use digit::digit_section;
pub use length::{length_section, MIN_LENGTH};
pub use special::special_section;
pub use uppercase::uppercase_section;

use secrecy::SecretString;

/// Number of composition rules.
pub const RULE_COUNT: usize = 4;

/// Signature shared by every section.
/// - `true` - rule satisfied
/// - `false` - rule not satisfied
pub type SectionFn = fn(&SecretString) -> bool;

/// A composition rule, in checklist display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Length,
    Uppercase,
    Digit,
    Special,
}

impl Rule {
    /// All rules in display order.
    pub const ALL: [Rule; RULE_COUNT] = [Rule::Length, Rule::Uppercase, Rule::Digit, Rule::Special];

    /// Position of the rule in a [`RuleVector`].
    pub fn index(self) -> usize {
        match self {
            Rule::Length => 0,
            Rule::Uppercase => 1,
            Rule::Digit => 2,
            Rule::Special => 3,
        }
    }

    /// Suggestion shown to the user while the rule is unmet.
    pub fn suggestion(self) -> &'static str {
        match self {
            Rule::Length => "Use at least 8 characters",
            Rule::Uppercase => "Include uppercase letters",
            Rule::Digit => "Add numbers",
            Rule::Special => "Use special characters",
        }
    }

    pub(crate) fn section(self) -> SectionFn {
        match self {
            Rule::Length => length_section,
            Rule::Uppercase => uppercase_section,
            Rule::Digit => digit_section,
            Rule::Special => special_section,
        }
    }
}

/// Per-rule satisfaction, indexed in [`Rule::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleVector(pub [bool; RULE_COUNT]);

impl RuleVector {
    /// Runs every section against the password.
    pub(crate) fn check(password: &SecretString) -> Self {
        let mut satisfied = [false; RULE_COUNT];
        for rule in Rule::ALL {
            satisfied[rule.index()] = (rule.section())(password);
        }
        Self(satisfied)
    }

    /// Raw predicate count, in `0..=4`.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&ok| ok).count()
    }

    pub fn is_satisfied(&self, rule: Rule) -> bool {
        self.0[rule.index()]
    }

    /// Rules paired with their satisfaction, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        Rule::ALL.into_iter().map(move |rule| (rule, self.is_satisfied(rule)))
    }
}

impl From<RuleVector> for [bool; RULE_COUNT] {
    fn from(vector: RuleVector) -> Self {
        vector.0
    }
}
