use progression_core::OutcomeRecord;

/// Row in the staff record list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordRowVm {
    pub credits_label: String,
    pub outcome: String,
}

impl From<&OutcomeRecord> for RecordRowVm {
    fn from(record: &OutcomeRecord) -> Self {
        Self {
            credits_label: record.credits().to_string(),
            outcome: record.outcome().to_string(),
        }
    }
}

#[must_use]
pub fn map_record_rows(records: &[OutcomeRecord]) -> Vec<RecordRowVm> {
    records.iter().map(RecordRowVm::from).collect()
}
