//! weekspend-ingest: budget config parsing and bank statement readers.

pub mod config;
pub mod parsers;
pub mod types;

pub use config::{ConfigError, load_config, parse_config};
pub use parsers::{parse_netbank_csv, parse_netbank_reader};
pub use types::StatementRow;
