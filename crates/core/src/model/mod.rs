mod credit;
mod outcome;
mod tally;

pub use credit::{Credit, CreditError, CreditField, CreditTuple};
pub use outcome::{Outcome, OutcomeCategory, OutcomeRecord};
pub use tally::{CategoryTally, Histogram, HistogramBar};
