//! Classified statement transactions.

use chrono::NaiveDate;
use serde::Serialize;

use crate::category::CategoryId;
use crate::money::Money;

/// Marker banks append to pending transactions; the text after it is the
/// date the transaction actually settled.
pub const VALUE_DATE_MARKER: &str = "Value Date:";

/// A parsed, classified statement line. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// 1-based row in the statement export
    pub row: usize,
    /// Effective date used for bucketing
    pub date: NaiveDate,
    pub description: String,
    /// Negative = spend, positive = credit
    pub amount: Money,
    pub category: CategoryId,
}

impl Transaction {
    pub fn new(
        row: usize,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: CategoryId,
    ) -> Self {
        Self {
            row,
            date,
            description: description.into(),
            amount,
            category,
        }
    }
}

/// Pick the date text to parse for a statement line: the trimmed text after
/// `Value Date:` when the description carries one, else the statement date.
///
/// Only the text up to a second marker (if any) is used.
pub fn effective_date_text<'a>(statement_date: &'a str, description: &'a str) -> &'a str {
    match description.split(VALUE_DATE_MARKER).nth(1) {
        Some(value_date) => value_date.trim(),
        None => statement_date.trim(),
    }
}
