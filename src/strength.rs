//! Strength classification table and evaluation result types.

use crate::sections::RuleVector;

/// Strength bucket selected from the raw predicate count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strength {
    /// Nothing typed yet.
    Empty,
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    /// Selects the bucket. An empty password is always [`Strength::Empty`],
    /// whatever the count; counts of 0 and 1 both map to [`Strength::Weak`].
    pub fn classify(is_empty: bool, raw_count: usize) -> Self {
        if is_empty {
            return Strength::Empty;
        }
        match raw_count {
            0 | 1 => Strength::Weak,
            2 => Strength::Fair,
            3 => Strength::Good,
            _ => Strength::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Empty => "",
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Strength::Empty => "#444",
            Strength::Weak => "#ff5b57",
            Strength::Fair => "#ffae42",
            Strength::Good => "#3c89e8",
            Strength::Strong => "#23d160",
        }
    }

    /// Score used to fill the progress indicator.
    ///
    /// `Weak` reports 1 even when no rule is satisfied.
    pub fn display_score(self) -> u8 {
        match self {
            Strength::Empty => 0,
            Strength::Weak => 1,
            Strength::Fair => 2,
            Strength::Good => 3,
            Strength::Strong => 4,
        }
    }
}

/// The `{score, label, color}` triple shown by the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub score: u8,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<Strength> for Classification {
    fn from(strength: Strength) -> Self {
        Self {
            score: strength.display_score(),
            label: strength.label(),
            color: strength.color(),
        }
    }
}

/// Full result of one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub strength: Strength,
    pub rules: RuleVector,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn classification(&self) -> Classification {
        self.strength.into()
    }

    /// Progress fill in percent: display score / 4 * 100.
    pub fn fill_percent(&self) -> u8 {
        self.strength.display_score() * 25
    }
}
