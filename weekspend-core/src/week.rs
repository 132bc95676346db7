//! Per-week containers: 7 day slots, each split per category.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::category::{CategoryId, CategoryRuleSet};
use crate::money::{Money, MoneyOverflowError};
use crate::time::{week_end, week_key, week_start, weekday_index};
use crate::transaction::Transaction;

/// Transactions of one category on one day, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySlot {
    pub category: CategoryId,
    pub transactions: Vec<Transaction>,
}

impl CategorySlot {
    pub fn total(&self) -> Result<Money, MoneyOverflowError> {
        Money::checked_sum(self.transactions.iter().map(|t| t.amount))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySlot {
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// Full weekday name, e.g. `Monday`
    pub name: String,
    /// One slot per category, in rule-set order
    pub category_slots: Vec<CategorySlot>,
}

impl DaySlot {
    fn new(date: NaiveDate, categories: &CategoryRuleSet) -> Self {
        Self {
            date,
            weekday: date.weekday(),
            name: date.format("%A").to_string(),
            category_slots: categories
                .categories()
                .iter()
                .map(|c| CategorySlot {
                    category: c.id,
                    transactions: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn slot(&self, category: CategoryId) -> Option<&CategorySlot> {
        self.category_slots.iter().find(|s| s.category == category)
    }

    pub fn slot_mut(&mut self, category: CategoryId) -> Option<&mut CategorySlot> {
        self.category_slots.iter_mut().find(|s| s.category == category)
    }

    /// Sum of one category's transactions on this day (zero if absent)
    pub fn category_total(&self, category: CategoryId) -> Result<Money, MoneyOverflowError> {
        match self.slot(category) {
            Some(slot) => slot.total(),
            None => Ok(Money::ZERO),
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.category_slots.iter().map(|s| s.transactions.len()).sum()
    }
}

/// One Monday..Sunday week, days indexed Sunday=0 .. Saturday=6
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekBucket {
    pub key: String,
    /// The Sunday the week ends on
    pub week_ending: NaiveDate,
    pub days: [DaySlot; 7],
}

impl WeekBucket {
    /// Empty bucket for the week containing `date`, with every day holding
    /// an empty slot per category.
    pub fn new(date: NaiveDate, categories: &CategoryRuleSet) -> Self {
        let monday = week_start(date);
        Self {
            key: week_key(date),
            week_ending: week_end(date),
            // index 0 is Sunday, six days after Monday
            days: std::array::from_fn(|i| {
                let offset = ((i + 6) % 7) as u64;
                DaySlot::new(monday + Days::new(offset), categories)
            }),
        }
    }

    pub fn day(&self, weekday: Weekday) -> &DaySlot {
        &self.days[weekday_index(weekday)]
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> &mut DaySlot {
        &mut self.days[weekday_index(weekday)]
    }

    pub fn transaction_count(&self) -> usize {
        self.days.iter().map(DaySlot::transaction_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryDecl;

    fn rules() -> CategoryRuleSet {
        CategoryRuleSet::new(
            vec![CategoryDecl::new("Food"), CategoryDecl::new("_")],
            "Uncategorized",
        )
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_new_bucket_is_fully_populated() {
        let rules = rules();
        let bucket = WeekBucket::new(d(2017, 10, 11), &rules);

        assert_eq!(bucket.key, "2017_October_15th");
        assert_eq!(bucket.week_ending, d(2017, 10, 15));
        assert_eq!(bucket.days[0].name, "Sunday");
        assert_eq!(bucket.days[6].name, "Saturday");
        let want: Vec<_> = rules.categories().iter().map(|c| c.id).collect();
        for day in &bucket.days {
            let ids: Vec<_> = day.category_slots.iter().map(|s| s.category).collect();
            assert_eq!(ids, want);
            assert!(day.category_slots.iter().all(|s| s.transactions.is_empty()));
        }
        assert_eq!(bucket.transaction_count(), 0);
    }

    #[test]
    fn test_day_slots_are_indexed_sunday_first() {
        // Mon 25 Sep .. Sun 1 Oct 2017
        let bucket = WeekBucket::new(d(2017, 9, 27), &rules());
        for (i, day) in bucket.days.iter().enumerate() {
            assert_eq!(day.weekday.num_days_from_sunday() as usize, i);
            assert_eq!(day.date.weekday(), day.weekday);
        }
        assert_eq!(bucket.days[0].date, d(2017, 10, 1));
        assert_eq!(bucket.days[1].date, d(2017, 9, 25));
        assert_eq!(bucket.days[6].date, d(2017, 9, 30));
    }

    #[test]
    fn test_day_lookup_by_weekday() {
        let rules = rules();
        let bucket = WeekBucket::new(d(2017, 10, 11), &rules);
        assert_eq!(bucket.day(Weekday::Wed).weekday, Weekday::Wed);
        assert_eq!(bucket.day(Weekday::Wed).date, d(2017, 10, 11));
        assert_eq!(bucket.day(Weekday::Sun).name, "Sunday");
        let food = rules.categories()[0].id;
        assert!(bucket.day(Weekday::Mon).category_total(food).unwrap().is_zero());
    }

    #[test]
    fn test_category_total_overflow_is_an_error() {
        let rules = rules();
        let food = rules.categories()[0].id;
        let mut bucket = WeekBucket::new(d(2017, 10, 11), &rules);
        let day = bucket.day_mut(Weekday::Wed);
        for amount in ["79228162514264337593543950335", "1"] {
            let amount = Money::parse(amount).unwrap();
            let txn = Transaction::new(1, day.date, "Big", amount, food);
            day.slot_mut(food).unwrap().transactions.push(txn);
        }
        assert!(day.category_total(food).is_err());
    }
}
