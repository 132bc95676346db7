//! Run settings produced by the configuration loader.

use serde::Serialize;

use crate::category::CategoryRuleSet;
use crate::money::Money;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Fixed income added to every week
    pub weekly_earning: Money,
    /// Fixed rent deducted once per week
    pub weekly_rent: Money,
    /// Refuse to produce reports while any transaction is uncategorized
    pub disallow_uncategorized: bool,
    /// Echo every report to stdout as well as writing it
    pub print_in_console: bool,
    pub categories: CategoryRuleSet,
}
