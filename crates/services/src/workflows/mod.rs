mod batch;
mod phase;
mod single;

pub use batch::BatchSession;
pub use phase::{PendingSubmission, SubmissionPhase};
pub use single::SingleSubmission;
