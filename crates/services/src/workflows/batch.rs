use progression_core::{
    CategoryTally, CreditTuple, Histogram, Outcome, OutcomeRecord, render_report,
};
use tracing::info;

use crate::error::{CalculationError, WorkflowError};
use crate::progression_client::ProgressionApi;
use crate::workflows::{PendingSubmission, SubmissionPhase};

/// Staff flow: repeated submissions accumulated into an append-only record list.
///
/// Tally, histogram and report are derived from the records on every call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSession {
    phase: SubmissionPhase,
    records: Vec<OutcomeRecord>,
}

impl BatchSession {
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

    #[must_use]
    pub fn records(&self) -> &[OutcomeRecord] {
        &self.records
    }

    #[must_use]
    pub fn tally(&self) -> CategoryTally {
        CategoryTally::from_records(&self.records)
    }

    #[must_use]
    pub fn histogram(&self) -> Histogram {
        Histogram::from_records(&self.records)
    }

    #[must_use]
    pub fn report_text(&self) -> String {
        render_report(&self.records)
    }

    /// # Errors
    ///
    /// Returns `WorkflowError::InFlight` while a request is outstanding.
    pub fn begin(&mut self, credits: CreditTuple) -> Result<PendingSubmission, WorkflowError> {
        self.phase.begin(credits)
    }

    /// Settle the outstanding request. Only a successful result adds a record.
    pub fn complete(
        &mut self,
        pending: PendingSubmission,
        result: Result<Outcome, CalculationError>,
    ) {
        if let Ok(outcome) = &result {
            self.records
                .push(OutcomeRecord::new(pending.credits(), outcome.clone()));
            info!(
                credits = %pending.credits(),
                %outcome,
                records = self.records.len(),
                "record added to batch"
            );
        }
        self.phase.settle(&result);
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
