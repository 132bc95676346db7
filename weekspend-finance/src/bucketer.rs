//! Group classified transactions into Monday..Sunday weeks.

use chrono::Datelike;
use std::collections::HashMap;
use thiserror::Error;
use weekspend_core::{CategoryId, CategoryRuleSet, Transaction, WeekBucket, week_key};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BucketError {
    #[error("row {row}: category {category} is not in the rule set")]
    UnknownCategory { row: usize, category: CategoryId },
}

/// Bucket every transaction by the week it falls in.
///
/// Keys are week keys (`2017_October_15th`). The map has no meaningful
/// iteration order; use [`weeks_in_order`] when output order matters.
/// Every transaction must carry a category from `rules`.
pub fn bucket_all(
    transactions: &[Transaction],
    rules: &CategoryRuleSet,
) -> Result<HashMap<String, WeekBucket>, BucketError> {
    let mut weeks: HashMap<String, WeekBucket> = HashMap::new();

    for txn in transactions {
        let bucket = weeks
            .entry(week_key(txn.date))
            .or_insert_with(|| WeekBucket::new(txn.date, rules));

        let slot = bucket
            .day_mut(txn.date.weekday())
            .slot_mut(txn.category)
            .ok_or(BucketError::UnknownCategory {
                row: txn.row,
                category: txn.category,
            })?;
        slot.transactions.push(txn.clone());
    }

    tracing::debug!(
        transactions = transactions.len(),
        weeks = weeks.len(),
        "bucketed transactions"
    );
    Ok(weeks)
}

/// Buckets sorted by the Sunday each week ends on.
pub fn weeks_in_order(weeks: &HashMap<String, WeekBucket>) -> Vec<&WeekBucket> {
    let mut ordered: Vec<&WeekBucket> = weeks.values().collect();
    ordered.sort_by_key(|w| w.week_ending);
    ordered
}
