use progression_core::{CreditTuple, Outcome};
use tracing::info;

use crate::error::{CalculationError, WorkflowError};
use crate::progression_client::ProgressionApi;
use crate::workflows::{PendingSubmission, SubmissionPhase};

/// Student flow: one credit tuple in, one outcome or error out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SingleSubmission {
    phase: SubmissionPhase,
}

impl SingleSubmission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.phase.is_submitting()
    }

    /// Move to `Submitting`, clearing any previous outcome or error.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::InFlight` while a request is outstanding.
    pub fn begin(&mut self, credits: CreditTuple) -> Result<PendingSubmission, WorkflowError> {
        self.phase.begin(credits)
    }

    pub fn complete(
        &mut self,
        pending: PendingSubmission,
        result: Result<Outcome, CalculationError>,
    ) {
        if let Ok(outcome) = &result {
            info!(credits = %pending.credits(), %outcome, "student outcome calculated");
        }
        self.phase.settle(&result);
    }

    /// Return to `Idle` once the result has been read. Ignored while submitting.
    pub fn dismiss(&mut self) {
        if !self.phase.is_submitting() {
            self.phase = SubmissionPhase::Idle;
        }
    }

    /// Run a whole cycle against `api`.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::InFlight` if a request is already outstanding.
    pub async fn submit(
        &mut self,
        api: &dyn ProgressionApi,
        credits: CreditTuple,
    ) -> Result<&SubmissionPhase, WorkflowError> {
        let pending = self.begin(credits)?;
        let result = api.calculate(pending.credits()).await;
        self.complete(pending, result);
        Ok(&self.phase)
    }
}
