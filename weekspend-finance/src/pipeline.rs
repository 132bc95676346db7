//! End-to-end run: rows -> transactions -> guard -> weeks -> reports -> sink.

use thiserror::Error;
use weekspend_core::{MoneyOverflowError, Settings};
use weekspend_ingest::StatementRow;

use crate::bucketer::{BucketError, bucket_all, weeks_in_order};
use crate::guard::{UncategorizedError, enforce_categorized};
use crate::report::{ReportSink, assemble};
use crate::transactions::{RowError, build_transactions};

/// Failures that stop the whole run before any report is persisted
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Row(#[from] RowError),

    #[error(transparent)]
    Uncategorized(#[from] UncategorizedError),

    #[error(transparent)]
    Bucket(#[from] BucketError),

    #[error("week {week}: {source}")]
    Overflow {
        week: String,
        #[source]
        source: MoneyOverflowError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub transactions: usize,
    pub weeks: usize,
    /// Week keys persisted successfully, in emission order
    pub written: Vec<String>,
    /// Week keys whose sink failed, with the error text
    pub failed: Vec<(String, String)>,
}

/// Classify, bucket and report a full statement.
///
/// Parsing, the uncategorized policy and report assembly are all-or-nothing.
/// Sink failures only lose the affected week; they are logged and recorded in
/// the summary.
pub fn run(settings: &Settings, rows: &[StatementRow], sink: &mut dyn ReportSink) -> Result<RunSummary, RunError> {
    let rules = &settings.categories;
    let transactions = build_transactions(rows, rules)?;
    enforce_categorized(&transactions, rules, settings.disallow_uncategorized)?;

    let weeks = bucket_all(&transactions, rules)?;
    let reports = weeks_in_order(&weeks)
        .into_iter()
        .map(|bucket| {
            assemble(
                bucket,
                settings.weekly_earning,
                settings.weekly_rent,
                rules.categories(),
            )
            .map_err(|source| RunError::Overflow {
                week: bucket.key.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut summary = RunSummary {
        transactions: transactions.len(),
        weeks: weeks.len(),
        ..RunSummary::default()
    };

    for report in reports {
        match sink.persist(&report) {
            Ok(()) => summary.written.push(report.week_key),
            Err(e) => {
                tracing::warn!(week = %report.week_key, error = %format!("{e:#}"), "failed to write report");
                summary.failed.push((report.week_key, format!("{e:#}")));
            }
        }
    }

    tracing::info!(
        transactions = summary.transactions,
        weeks = summary.weeks,
        written = summary.written.len(),
        failed = summary.failed.len(),
        "run complete"
    );
    Ok(summary)
}
