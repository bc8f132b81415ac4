use progression_core::{CreditTuple, Outcome};

use crate::error::{CalculationError, WorkflowError};

/// Where a screen's single request/response cycle currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded(Outcome),
    Failed(String),
}

impl SubmissionPhase {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            SubmissionPhase::Succeeded(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub(crate) fn begin(
        &mut self,
        credits: CreditTuple,
    ) -> Result<PendingSubmission, WorkflowError> {
        if self.is_submitting() {
            return Err(WorkflowError::InFlight);
        }
        *self = SubmissionPhase::Submitting;
        Ok(PendingSubmission { credits })
    }

    pub(crate) fn settle(&mut self, result: &Result<Outcome, CalculationError>) {
        *self = match result {
            Ok(outcome) => SubmissionPhase::Succeeded(outcome.clone()),
            Err(err) => SubmissionPhase::Failed(err.to_string()),
        };
    }
}

/// Proof that a workflow accepted a submission; hand it back with the result.
///
/// Only `begin` creates one and `complete` consumes it, so at most one request
/// per workflow is ever outstanding.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending submission must be completed or the workflow stays in Submitting"]
pub struct PendingSubmission {
    credits: CreditTuple,
}

impl PendingSubmission {
    pub fn credits(&self) -> CreditTuple {
        self.credits
    }
}
