//! I/O module
//!
//! Handles ledger script parsing and CSV output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `script_reader` - Streaming script reader with iterator interface

pub mod csv_format;
pub mod script_reader;

pub use csv_format::{
    convert_script_record, write_accounts_csv, write_statements_csv, Command, ScriptRecord,
};
pub use script_reader::ScriptReader;
