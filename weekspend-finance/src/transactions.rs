//! Turn raw statement rows into classified transactions.

use chrono::NaiveDate;
use thiserror::Error;
use weekspend_core::{CategoryRuleSet, Money, Transaction, effective_date_text};
use weekspend_ingest::StatementRow;

use crate::category_rules::classify;

/// NetBank dates are day-first: `05/01/2018` is 5 January 2018.
pub const STATEMENT_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row {row}: unable to parse date {value:?}")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: unable to parse the price {value:?} as currency")]
    InvalidAmount { row: usize, value: String },
}

impl RowError {
    pub fn row(&self) -> usize {
        match self {
            RowError::InvalidDate { row, .. } | RowError::InvalidAmount { row, .. } => *row,
        }
    }
}

/// Parse and classify a single row.
pub fn build_transaction(row: &StatementRow, rules: &CategoryRuleSet) -> Result<Transaction, RowError> {
    let date_text = effective_date_text(&row.date, &row.description);
    let date = NaiveDate::parse_from_str(date_text, STATEMENT_DATE_FORMAT).map_err(|_| {
        RowError::InvalidDate {
            row: row.row,
            value: date_text.to_string(),
        }
    })?;

    let amount = Money::parse(&row.amount).map_err(|_| RowError::InvalidAmount {
        row: row.row,
        value: row.amount.clone(),
    })?;

    Ok(Transaction::new(
        row.row,
        date,
        row.description.clone(),
        amount,
        classify(&row.description, rules),
    ))
}

/// Parse and classify every row, stopping at the first bad one.
pub fn build_transactions(rows: &[StatementRow], rules: &CategoryRuleSet) -> Result<Vec<Transaction>, RowError> {
    rows.iter().map(|r| build_transaction(r, rules)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekspend_core::CategoryDecl;

    fn rules() -> CategoryRuleSet {
        CategoryRuleSet::new(
            vec![CategoryDecl::new("Eating Out").with_rule("Restaurant")],
            "Uncategorized",
        )
    }

    #[test]
    fn test_build_basic_transaction() {
        let row = StatementRow::new(1, "11/10/2017", "$-23.40", "EFTPOS Restaurant Hubert");
        let rules = rules();
        let txn = build_transaction(&row, &rules).unwrap();
        assert_eq!(txn.row, 1);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2017, 10, 11).unwrap());
        assert_eq!(txn.amount.to_string(), "-23.4");
        assert_eq!(txn.category, rules.categories()[0].id);
    }

    #[test]
    fn test_value_date_overrides_statement_date() {
        let row = StatementRow::new(
            4,
            "08/01/2018",
            "-23.40",
            "EFTPOS Restaurant Hubert Value Date: 05/01/2018",
        );
        let txn = build_transaction(&row, &rules()).unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2018, 1, 5).unwrap());
    }

    #[test]
    fn test_bad_date_reports_row() {
        let rows = vec![
            StatementRow::new(1, "01/10/2017", "-1", "ok"),
            StatementRow::new(2, "2017-10-02", "-1", "iso date"),
        ];
        let err = build_transactions(&rows, &rules()).unwrap_err();
        assert_eq!(
            err,
            RowError::InvalidDate {
                row: 2,
                value: "2017-10-02".to_string()
            }
        );
    }

    #[test]
    fn test_bad_value_date_reports_value_date_text() {
        let row = StatementRow::new(7, "01/10/2017", "-1", "ATM Value Date: soon");
        let err = build_transaction(&row, &rules()).unwrap_err();
        assert_eq!(err.row(), 7);
        assert!(err.to_string().contains("\"soon\""), "{err}");
    }

    #[test]
    fn test_bad_amount_reports_row() {
        let row = StatementRow::new(3, "01/10/2017", "", "blank amount");
        let err = build_transaction(&row, &rules()).unwrap_err();
        assert!(matches!(err, RowError::InvalidAmount { row: 3, .. }));
    }
}
