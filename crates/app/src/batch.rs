//! Batch input for the `batch` subcommand: one `pass,defer,fail` row per student.

use std::io::Read;

use anyhow::{Context, Result, bail};
use progression_core::{Credit, CreditTuple};

pub fn read_credit_rows<R: Read>(input: R) -> Result<Vec<CreditTuple>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to read batch input")?;
        let line = record.position().map_or(0, csv::Position::line);
        if record.len() != 3 {
            bail!(
                "line {line}: expected pass,defer,fail but found {} fields",
                record.len()
            );
        }
        let credit = |idx: usize| -> Result<Credit> {
            record[idx]
                .parse::<Credit>()
                .with_context(|| format!("line {line}, field {}", idx + 1))
        };
        rows.push(CreditTuple::new(credit(0)?, credit(1)?, credit(2)?));
    }
    Ok(rows)
}
