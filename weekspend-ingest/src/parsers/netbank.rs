//! NetBank CSV export reader
//!
//! The export has no header row:
//!   date,amount,description,balance
//!   09/10/2017,-4.50,"EFTPOS Cafe Nero Sydney",1234.56

use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;

use crate::types::StatementRow;

/// Parse a NetBank CSV file into raw rows, in file order.
pub fn parse_netbank_csv(path: impl AsRef<Path>) -> Result<Vec<StatementRow>> {
    let path = path.as_ref();
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    read_rows(rdr).with_context(|| format!("reading {}", path.display()))
}

/// Same as [`parse_netbank_csv`] for any reader.
pub fn parse_netbank_reader<R: Read>(reader: R) -> Result<Vec<StatementRow>> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    read_rows(rdr)
}

fn read_rows<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<StatementRow>> {
    let mut rows = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let record = result.with_context(|| format!("row {row}: malformed CSV"))?;
        if record.len() < 3 {
            bail!(
                "row {row}: expected date, amount and description, found {} column(s)",
                record.len()
            );
        }

        rows.push(StatementRow {
            row,
            date: record.get(0).unwrap_or("").trim().to_string(),
            amount: record.get(1).unwrap_or("").trim().to_string(),
            description: record.get(2).unwrap_or("").trim().to_string(),
        });
    }

    Ok(rows)
}
