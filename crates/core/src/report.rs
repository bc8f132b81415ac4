//! Plain-text progression report.

use std::fmt::Write as _;

use crate::model::OutcomeRecord;

/// File name offered when the report is downloaded.
pub const REPORT_FILE_NAME: &str = "Progression.txt";

const REPORT_HEADER: &str = "Progression Report\n==================\n\n";

/// Render one line per record, in submission order, below a fixed header.
#[must_use]
pub fn render_report(records: &[OutcomeRecord]) -> String {
    let mut text = String::from(REPORT_HEADER);
    for record in records {
        let credits = record.credits();
        // Writing into a String cannot fail.
        let _ = writeln!(
            text,
            "{} - {}, {}, {}",
            record.outcome(),
            credits.pass,
            credits.defer,
            credits.fail
        );
    }
    text
}
