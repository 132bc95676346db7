//! Bank-specific statement readers.

pub mod netbank;

pub use netbank::{parse_netbank_csv, parse_netbank_reader};
