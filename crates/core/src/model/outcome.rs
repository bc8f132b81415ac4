use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::CreditTuple;

/// Outcome label as returned by the progression calculator.
///
/// The vocabulary is owned by the calculator, so any label is accepted here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outcome(String);

impl Outcome {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The histogram category this outcome counts towards, if it is a known label.
    #[must_use]
    pub fn category(&self) -> Option<OutcomeCategory> {
        OutcomeCategory::from_label(&self.0)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<OutcomeCategory> for Outcome {
    fn from(category: OutcomeCategory) -> Self {
        Self::new(category.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutcomeCategory {
    Progress,
    Trailer,
    Retriever,
    Exclude,
}

impl OutcomeCategory {
    /// Display order of the histogram.
    pub const ALL: [OutcomeCategory; 4] = [
        OutcomeCategory::Progress,
        OutcomeCategory::Trailer,
        OutcomeCategory::Retriever,
        OutcomeCategory::Exclude,
    ];

    /// Label used by the calculator.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OutcomeCategory::Progress => "Progress",
            OutcomeCategory::Trailer => "Progress (module trailer)",
            OutcomeCategory::Retriever => "Module retriever",
            OutcomeCategory::Exclude => "Exclude",
        }
    }

    /// Short label for histogram axes.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            OutcomeCategory::Progress => "Progress",
            OutcomeCategory::Trailer => "Trailer",
            OutcomeCategory::Retriever => "Retriever",
            OutcomeCategory::Exclude => "Excluded",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            OutcomeCategory::Progress => 0,
            OutcomeCategory::Trailer => 1,
            OutcomeCategory::Retriever => 2,
            OutcomeCategory::Exclude => 3,
        }
    }
}

/// A credit tuple together with the outcome the calculator produced for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeRecord {
    credits: CreditTuple,
    outcome: Outcome,
}

impl OutcomeRecord {
    #[must_use]
    pub fn new(credits: CreditTuple, outcome: Outcome) -> Self {
        Self { credits, outcome }
    }

    #[must_use]
    pub fn credits(&self) -> CreditTuple {
        self.credits
    }

    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_categories() {
        for category in OutcomeCategory::ALL {
            assert_eq!(Outcome::from(category).category(), Some(category));
        }
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(Outcome::new("progress").category(), None);
        assert_eq!(Outcome::new("Progress ").category(), None);
        assert_eq!(Outcome::new("Excluded").category(), None);
    }
}
