//! Line-oriented budget configuration.
//!
//! ```text
//! # comments and blank lines are ignored
//! Earning Per Week: $1000
//! Rent Per Week: $300
//! Disallow Uncategorized: true
//! Print In Console: false
//! No Category: Other
//!
//! Category: Groceries
//! WOOLWORTHS
//! Coles
//!
//! Category: _
//! Transfer to xx1234
//! ```
//!
//! A line without `:` is a substring rule for the most recent `Category:`.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;
use weekspend_core::{CategoryDecl, CategoryRuleSet, DEFAULT_FALLBACK_NAME, Money, Settings};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("line {line}: unable to process, too many ':' in {text:?}")]
    TooManySeparators { line: usize, text: String },

    #[error("line {line}: invalid key {key:?}")]
    UnknownKey { line: usize, key: String },

    #[error("line {line}: cannot declare {key:?} more than once in one config file")]
    Duplicate { line: usize, key: String },

    #[error("line {line}: cannot have blank value for {key:?}")]
    BlankValue { line: usize, key: String },

    #[error("line {line}: unable to read {value:?} for {key:?}")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },

    #[error("line {line}: rule {text:?} appears before any \"Category\"")]
    RuleWithoutCategory { line: usize, text: String },
}

impl ConfigError {
    pub fn line(&self) -> usize {
        match self {
            ConfigError::TooManySeparators { line, .. }
            | ConfigError::UnknownKey { line, .. }
            | ConfigError::Duplicate { line, .. }
            | ConfigError::BlankValue { line, .. }
            | ConfigError::InvalidValue { line, .. }
            | ConfigError::RuleWithoutCategory { line, .. } => *line,
        }
    }
}

/// Single-valued settings, `None` until declared
#[derive(Default)]
struct Declared {
    earning: Option<Money>,
    rent: Option<Money>,
    fallback_name: Option<String>,
    disallow_uncategorized: Option<bool>,
    print_in_console: Option<bool>,
}

/// Read and parse a config file.
pub fn load_config(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parse {}", path.display()))
}

/// Parse config text into run settings.
pub fn parse_config(text: &str) -> Result<Settings, ConfigError> {
    let mut declared = Declared::default();
    let mut decls: Vec<CategoryDecl> = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let l = raw.trim();
        if l.is_empty() || l.starts_with('#') {
            continue;
        }

        let mut parts = l.split(':');
        let key = parts.next().unwrap_or("").trim();
        let value = match (parts.next(), parts.next()) {
            (None, _) => {
                let Some(category) = decls.last_mut() else {
                    return Err(ConfigError::RuleWithoutCategory {
                        line,
                        text: l.to_string(),
                    });
                };
                category.rules.push(l.to_string());
                continue;
            }
            (Some(value), None) => value.trim(),
            (Some(_), Some(_)) => {
                return Err(ConfigError::TooManySeparators {
                    line,
                    text: l.to_string(),
                });
            }
        };

        if value.is_empty() {
            return Err(ConfigError::BlankValue {
                line,
                key: key.to_string(),
            });
        }

        match key {
            "Category" => decls.push(CategoryDecl::new(value)),
            "Earning Per Week" => set_once(&mut declared.earning, parse_money(line, key, value)?, line, key)?,
            "Rent Per Week" => set_once(&mut declared.rent, parse_money(line, key, value)?, line, key)?,
            "No Category" => set_once(&mut declared.fallback_name, value.to_string(), line, key)?,
            "Disallow Uncategorized" => set_once(
                &mut declared.disallow_uncategorized,
                parse_bool(line, key, value)?,
                line,
                key,
            )?,
            "Print In Console" => set_once(
                &mut declared.print_in_console,
                parse_bool(line, key, value)?,
                line,
                key,
            )?,
            _ => {
                return Err(ConfigError::UnknownKey {
                    line,
                    key: key.to_string(),
                });
            }
        }
    }

    let fallback_name = declared
        .fallback_name
        .unwrap_or_else(|| DEFAULT_FALLBACK_NAME.to_string());

    Ok(Settings {
        weekly_earning: declared.earning.unwrap_or_default(),
        weekly_rent: declared.rent.unwrap_or_default(),
        disallow_uncategorized: declared.disallow_uncategorized.unwrap_or(false),
        print_in_console: declared.print_in_console.unwrap_or(false),
        categories: CategoryRuleSet::new(decls, fallback_name),
    })
}

fn set_once<T>(slot: &mut Option<T>, value: T, line: usize, key: &str) -> Result<(), ConfigError> {
    if slot.is_some() {
        return Err(ConfigError::Duplicate {
            line,
            key: key.to_string(),
        });
    }
    *slot = Some(value);
    Ok(())
}

fn parse_money(line: usize, key: &str, value: &str) -> Result<Money, ConfigError> {
    Money::parse(value).map_err(|_| ConfigError::InvalidValue {
        line,
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(line: usize, key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            line,
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
