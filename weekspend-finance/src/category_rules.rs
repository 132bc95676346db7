//! Deterministic, first-match-wins categorization.
//!
//! Categories are scanned in declaration order and, within a category, rules
//! in declaration order. The first category with any matching rule wins, even
//! when a later category has a longer or more specific match.

use weekspend_core::{CategoryId, CategoryRuleSet};

/// Category for a transaction description, or the fallback if nothing matches.
pub fn classify(description: &str, rules: &CategoryRuleSet) -> CategoryId {
    rules
        .categories()
        .iter()
        .find(|c| c.matches(description))
        .map(|c| c.id)
        .unwrap_or_else(|| rules.fallback_id())
}
