//! weekspend-core: money, categories, transactions and week containers

pub mod category;
pub mod money;
pub mod settings;
pub mod time;
pub mod transaction;
pub mod week;

pub use category::{
    Category, CategoryDecl, CategoryId, CategoryRule, CategoryRuleSet, DEFAULT_FALLBACK_NAME,
    HIDDEN_CATEGORY_NAME,
};
pub use money::{Money, MoneyOverflowError, ParseMoneyError};
pub use settings::Settings;
pub use time::{DISPLAY_WEEK, day_ordinal, week_end, week_key, week_start, weekday_index};
pub use transaction::{Transaction, VALUE_DATE_MARKER, effective_date_text};
pub use week::{CategorySlot, DaySlot, WeekBucket};
