//! Spending categories and their substring rules.
//!
//! Categories are held in declaration order. That order decides match
//! precedence and the column order of every weekly report. The fallback
//! category is always the last entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used for the fallback category unless the config overrides it
pub const DEFAULT_FALLBACK_NAME: &str = "Uncategorized";

/// Categories with this name are tracked and totalled but never rendered as a column
pub const HIDDEN_CATEGORY_NAME: &str = "_";

/// Stable identifier assigned at configuration load (position in the rule set).
///
/// Only a [`CategoryRuleSet`] hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CategoryId(pub(crate) usize);

impl CategoryId {
    /// Position of the category in its rule set
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A case-sensitive substring rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub match_text: String,
}

impl CategoryRule {
    pub fn new(match_text: impl Into<String>) -> Self {
        Self {
            match_text: match_text.into(),
        }
    }

    pub fn matches(&self, description: &str) -> bool {
        description.contains(self.match_text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub rules: Vec<CategoryRule>,
}

impl Category {
    /// True if any of this category's rules match the description
    pub fn matches(&self, description: &str) -> bool {
        self.rules.iter().any(|r| r.matches(description))
    }

    pub fn is_hidden(&self) -> bool {
        self.name == HIDDEN_CATEGORY_NAME
    }
}

/// A category as declared in configuration, before ids are assigned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDecl {
    pub name: String,
    pub rules: Vec<String>,
}

impl CategoryDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, match_text: impl Into<String>) -> Self {
        self.rules.push(match_text.into());
        self
    }
}

/// Ordered, read-only set of categories with the fallback appended last
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRuleSet {
    categories: Vec<Category>,
}

impl CategoryRuleSet {
    /// Build the rule set from declarations in file order.
    ///
    /// Declarations named like the fallback do not create a new category;
    /// their rules are attached to the fallback instead.
    pub fn new(decls: Vec<CategoryDecl>, fallback_name: impl Into<String>) -> Self {
        let fallback_name = fallback_name.into();
        let mut categories = Vec::with_capacity(decls.len() + 1);
        let mut fallback_rules = Vec::new();

        for decl in decls {
            let rules = decl.rules.into_iter().map(CategoryRule::new);
            if decl.name == fallback_name {
                fallback_rules.extend(rules);
                continue;
            }
            categories.push(Category {
                id: CategoryId(categories.len()),
                name: decl.name,
                rules: rules.collect(),
            });
        }

        categories.push(Category {
            id: CategoryId(categories.len()),
            name: fallback_name,
            rules: fallback_rules,
        });

        Self { categories }
    }

    /// All categories in declaration order, fallback last
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn fallback(&self) -> &Category {
        // `new` always pushes the fallback
        &self.categories[self.categories.len() - 1]
    }

    pub fn fallback_id(&self) -> CategoryId {
        self.fallback().id
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.0)
    }

    /// Name of a category, or the fallback's name for an unknown id
    pub fn name_of(&self, id: CategoryId) -> &str {
        self.get(id).unwrap_or_else(|| self.fallback()).name.as_str()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryRuleSet {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_FALLBACK_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_appended_last() {
        let set = CategoryRuleSet::new(
            vec![
                CategoryDecl::new("Food").with_rule("WOOLWORTHS"),
                CategoryDecl::new("Transport").with_rule("OPAL"),
            ],
            DEFAULT_FALLBACK_NAME,
        );
        let names: Vec<_> = set.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Transport", "Uncategorized"]);
        assert_eq!(set.fallback_id(), CategoryId(2));
        for (i, c) in set.categories().iter().enumerate() {
            assert_eq!(c.id.index(), i);
        }
    }

    #[test]
    fn test_fallback_declaration_merges_rules() {
        let set = CategoryRuleSet::new(
            vec![
                CategoryDecl::new("Misc").with_rule("ATM"),
                CategoryDecl::new("Food").with_rule("CAFE"),
            ],
            "Misc",
        );
        assert_eq!(set.len(), 2);
        assert_eq!(set.fallback().name, "Misc");
        assert_eq!(set.fallback().rules, vec![CategoryRule::new("ATM")]);
        assert_eq!(set.categories()[0].name, "Food");
    }

    #[test]
    fn test_rule_matching_is_case_sensitive_substring() {
        let rule = CategoryRule::new("Coles");
        assert!(rule.matches("EFTPOS Coles 0412 Sydney"));
        assert!(!rule.matches("EFTPOS COLES 0412 Sydney"));
    }

    #[test]
    fn test_hidden_category() {
        let set = CategoryRuleSet::new(vec![CategoryDecl::new("_").with_rule("Transfer")], "Other");
        assert!(set.categories()[0].is_hidden());
        assert!(!set.fallback().is_hidden());
        assert_eq!(set.name_of(CategoryId(99)), "Other");
    }
}
