#![forbid(unsafe_code)]

pub mod model;
pub mod report;

pub use model::{
    CategoryTally, Credit, CreditError, CreditField, CreditTuple, Histogram, HistogramBar,
    Outcome, OutcomeCategory, OutcomeRecord,
};
pub use report::{REPORT_FILE_NAME, render_report};
