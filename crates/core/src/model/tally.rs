use crate::model::{OutcomeCategory, OutcomeRecord};

/// Per-category outcome counts, recomputed from a record sequence.
///
/// Records whose outcome is not one of the known categories are skipped, so
/// `total()` can be smaller than the number of records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryTally {
    counts: [u32; 4],
}

impl CategoryTally {
    #[must_use]
    pub fn from_records(records: &[OutcomeRecord]) -> Self {
        let mut counts = [0_u32; 4];
        for category in records.iter().filter_map(|record| record.outcome().category()) {
            let slot = &mut counts[category.index()];
            *slot = slot.saturating_add(1);
        }
        Self { counts }
    }

    #[must_use]
    pub fn count(&self, category: OutcomeCategory) -> u32 {
        self.counts[category.index()]
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0_u32, |acc, n| acc.saturating_add(*n))
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// One histogram bar per known category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBar {
    pub category: OutcomeCategory,
    pub count: u32,
    /// `count / records`, or 0 when there are no records.
    pub share_of_total: f64,
    /// `count / max(counts)`, or 0 when every count is 0.
    pub share_of_max: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    bars: Vec<HistogramBar>,
    total_records: usize,
}

impl Histogram {
    #[must_use]
    pub fn from_records(records: &[OutcomeRecord]) -> Self {
        let tally = CategoryTally::from_records(records);
        let total_records = records.len();
        let max = tally.max();

        let bars = OutcomeCategory::ALL
            .into_iter()
            .map(|category| {
                let count = tally.count(category);
                HistogramBar {
                    category,
                    count,
                    share_of_total: ratio(u64::from(count), total_records as u64),
                    share_of_max: ratio(u64::from(count), u64::from(max)),
                }
            })
            .collect();

        Self {
            bars,
            total_records,
        }
    }

    #[must_use]
    pub fn bars(&self) -> &[HistogramBar] {
        &self.bars
    }

    /// Number of records, including those with unrecognized outcomes.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.total_records
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
