//! "Disallow Uncategorized" policy, checked once over the whole statement.

use std::fmt;
use thiserror::Error;
use weekspend_core::{CategoryRuleSet, Transaction};

/// Every transaction that fell through to the fallback category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct UncategorizedError {
    pub descriptions: Vec<String>,
}

impl fmt::Display for UncategorizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Uncategorized transactions found:")?;
        for d in &self.descriptions {
            writeln!(f, "- {d}")?;
        }
        write!(f, "Stopping due to \"Disallow Uncategorized\" being set to true.")
    }
}

/// Reject the run if uncategorized transactions are disallowed and present.
pub fn enforce_categorized(
    transactions: &[Transaction],
    rules: &CategoryRuleSet,
    disallow_uncategorized: bool,
) -> Result<(), UncategorizedError> {
    if !disallow_uncategorized {
        return Ok(());
    }

    let fallback = rules.fallback_id();
    let descriptions: Vec<String> = transactions
        .iter()
        .filter(|t| t.category == fallback)
        .map(|t| t.description.clone())
        .collect();

    if descriptions.is_empty() {
        Ok(())
    } else {
        Err(UncategorizedError { descriptions })
    }
}
