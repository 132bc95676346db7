//! weekspend-finance: classification, weekly bucketing and report assembly

pub mod bucketer;
pub mod category_rules;
pub mod guard;
pub mod pipeline;
pub mod report;
pub mod transactions;

pub use bucketer::{BucketError, bucket_all, weeks_in_order};
pub use category_rules::classify;
pub use guard::{UncategorizedError, enforce_categorized};
pub use pipeline::{RunError, RunSummary, run};
pub use report::{DayRow, MemorySink, ReportSink, WeekReport, assemble};
pub use transactions::{RowError, STATEMENT_DATE_FORMAT, build_transaction, build_transactions};
