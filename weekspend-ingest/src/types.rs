use serde::{Deserialize, Serialize};

/// One unparsed statement line (bank-agnostic)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    /// 1-based position in the export
    pub row: usize,
    /// Statement date as exported, e.g. `09/10/2017`
    pub date: String,
    /// Signed amount, optionally `$`-prefixed
    pub amount: String,
    pub description: String,
}

impl StatementRow {
    pub fn new(
        row: usize,
        date: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            row,
            date: date.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }
}
