//! Weekly spend report: one row per weekday, one column per visible category.
//!
//! Rendered CSV (every field quoted):
//!   "","Groceries","Eating Out"
//!   "Monday","-52.3","-4.5"
//!   ...
//!   "Sunday","-8.5",""
//!   "Earning This Week","1000"
//!   "Rent This Week","-300"
//!   "Total Saved","549.51"

use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use weekspend_core::{Category, DISPLAY_WEEK, Money, MoneyOverflowError, WeekBucket};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRow {
    pub weekday: Weekday,
    pub name: String,
    /// Per visible category, in column order
    pub amounts: Vec<Money>,
    /// All categories for the day, hidden ones included
    pub total: Money,
}

impl DayRow {
    /// Cell text for each column; zero sums render as an empty cell.
    pub fn cells(&self) -> Vec<String> {
        self.amounts.iter().map(|m| render_cell(*m)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekReport {
    pub week_key: String,
    pub week_ending: NaiveDate,
    pub columns: Vec<String>,
    /// Monday through Sunday
    pub days: Vec<DayRow>,
    pub weekly_earning: Money,
    pub weekly_rent: Money,
    /// Sum of the day totals (spend is negative)
    pub net_spend: Money,
    /// `weekly_earning - weekly_rent + net_spend`
    pub total_saved: Money,
}

/// Build the report for one week.
///
/// `categories` gives the column order; categories named `_` are summed into
/// the totals but get no column. Fails if any sum leaves the range `Money`
/// can hold exactly.
pub fn assemble(
    bucket: &WeekBucket,
    weekly_earning: Money,
    weekly_rent: Money,
    categories: &[Category],
) -> Result<WeekReport, MoneyOverflowError> {
    let columns = categories
        .iter()
        .filter(|c| !c.is_hidden())
        .map(|c| c.name.clone())
        .collect();

    let mut days = Vec::with_capacity(DISPLAY_WEEK.len());
    for weekday in DISPLAY_WEEK {
        let day = bucket.day(weekday);
        let mut total = Money::ZERO;
        let mut amounts = Vec::with_capacity(categories.len());
        for category in categories {
            let sum = day.category_total(category.id)?;
            total = total.checked_add(sum)?;
            if !category.is_hidden() {
                amounts.push(sum);
            }
        }
        days.push(DayRow {
            weekday,
            name: day.name.clone(),
            amounts,
            total,
        });
    }

    let net_spend = Money::checked_sum(days.iter().map(|d| d.total))?;
    let total_saved = weekly_earning
        .checked_sub(weekly_rent)?
        .checked_add(net_spend)?;

    tracing::debug!(week = %bucket.key, %net_spend, %total_saved, "assembled week");

    Ok(WeekReport {
        week_key: bucket.key.clone(),
        week_ending: bucket.week_ending,
        columns,
        days,
        weekly_earning,
        weekly_rent,
        net_spend,
        total_saved,
    })
}

impl WeekReport {
    /// Records in output order, header first.
    pub fn records(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.days.len() + 4);

        let mut header = vec![String::new()];
        header.extend(self.columns.iter().cloned());
        out.push(header);

        for day in &self.days {
            let mut row = vec![day.name.clone()];
            row.extend(day.cells());
            out.push(row);
        }

        out.push(vec!["Earning This Week".to_string(), self.weekly_earning.to_string()]);
        out.push(vec!["Rent This Week".to_string(), format!("-{}", self.weekly_rent)]);
        out.push(vec!["Total Saved".to_string(), self.total_saved.to_string()]);
        out
    }

    /// Render as CSV with every field double-quoted.
    pub fn to_csv(&self) -> Result<String> {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        for record in self.records() {
            wtr.write_record(&record)
                .with_context(|| format!("writing report {}", self.week_key))?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| anyhow::anyhow!("flushing report {}: {}", self.week_key, e.error()))?;
        String::from_utf8(bytes).context("report is not valid UTF-8")
    }
}

/// Where finished reports go (a directory, the console, a test buffer).
pub trait ReportSink {
    fn persist(&mut self, report: &WeekReport) -> Result<()>;
}

/// Collects reports in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub reports: Vec<WeekReport>,
}

impl ReportSink for MemorySink {
    fn persist(&mut self, report: &WeekReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}

fn render_cell(amount: Money) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        amount.to_string()
    }
}
