//! Streaming reader for ledger scripts
//!
//! Provides an iterator over the [`Command`]s of a CSV script file. Delegates
//! CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use banking_ledger::io::script_reader::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::new(Path::new("script.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Running command: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as `Err` items, tagged with their line

use crate::io::csv_format::{convert_script_record, Command, ScriptRecord};
use crate::types::BankError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous script reader
///
/// Reads one record at a time; memory use does not grow with the file size.
#[derive(Debug)]
pub struct ScriptReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
}

impl ScriptReader {
    /// Open a script file
    ///
    /// The CSV reader trims whitespace from all fields and accepts rows with
    /// fewer columns than the header.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the file does not exist, `IoError` if it
    /// cannot be opened for another reason and `ParseError` if the header
    /// row cannot be read.
    pub fn new(path: &Path) -> Result<Self, BankError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BankError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => BankError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        let headers = reader.headers()?.clone();

        Ok(Self { reader, headers })
    }
}

impl Iterator for ScriptReader {
    type Item = Result<Command, BankError>;

    /// Read the next command
    ///
    /// Errors carry the physical line on which the offending row starts (the
    /// header is line 1). Blank lines and quoted fields spanning several
    /// lines are accounted for.
    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(false) => return None,
            Ok(true) => {}
            Err(e) => return Some(Err(BankError::from(e))),
        }

        let line = record.position().map(|pos| pos.line());

        Some(
            record
                .deserialize::<ScriptRecord>(Some(&self.headers))
                .map_err(BankError::from)
                .and_then(convert_script_record)
                .map_err(|e| match e {
                    BankError::ParseError { message, .. } => BankError::ParseError { line, message },
                    other => BankError::ParseError {
                        line,
                        message: other.to_string(),
                    },
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "op,identity,account,amount,name,birth_date,address\n";

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(HEADER.as_bytes())
            .expect("Failed to write to temp file");
        file.write_all(body.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_new_fails_on_missing_file() {
        let result = ScriptReader::new(Path::new("nonexistent.csv"));
        assert_eq!(
            result.unwrap_err(),
            BankError::FileNotFound {
                path: "nonexistent.csv".to_string()
            }
        );
    }

    #[test]
    fn test_reads_commands_in_order() {
        let file = create_temp_csv(
            "new_client,12345678901,,,Ana Souza,01-02-1990,\"Rua A, 10\"\n\
             new_account,12345678901,,,,,\n\
             deposit,12345678901,1,100.0,,,\n\
             withdraw,12345678901,1,40,,,\n",
        );

        let commands: Vec<_> = ScriptReader::new(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[0],
            Command::NewClient {
                identity: "12345678901".to_string(),
                name: "Ana Souza".to_string(),
                birth_date: "01-02-1990".to_string(),
                address: "Rua A, 10".to_string(),
            }
        );
        assert!(matches!(commands[1], Command::NewAccount { .. }));
        assert_eq!(
            commands[3],
            Command::Transaction {
                kind: TransactionKind::Withdrawal,
                identity: "12345678901".to_string(),
                account: 1,
                amount: Decimal::from(40),
            }
        );
    }

    #[test]
    fn test_accepts_short_rows() {
        let file = create_temp_csv("new_account,12345678901\ndeposit,12345678901,1,5\n");

        let commands: Vec<_> = ScriptReader::new(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_errors_carry_line_numbers_and_reading_continues() {
        let file = create_temp_csv(
            "new_account,12345678901,,,,,\n\
             transfer,12345678901,1,10,,,\n\
             deposit,12345678901,1,abc,,,\n\
             deposit,12345678901,1,10,,,\n",
        );

        let results: Vec<_> = ScriptReader::new(file.path()).unwrap().collect();

        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(results[3].is_ok());

        let unknown = results[1].as_ref().unwrap_err();
        assert!(matches!(unknown, BankError::ParseError { line: Some(3), .. }));
        assert!(unknown.to_string().contains("Invalid operation 'transfer'"));

        let bad_amount = results[2].as_ref().unwrap_err();
        assert_eq!(
            bad_amount.to_string(),
            "CSV parse error at line 4: Invalid amount 'abc'"
        );
    }

    #[test]
    fn test_line_numbers_skip_blank_lines() {
        let file = create_temp_csv(
            "\n\
             new_account,12345678901,,,,,\n\
             \n\
             transfer,12345678901,1,10,,,\n",
        );

        let results: Vec<_> = ScriptReader::new(file.path()).unwrap().collect();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(BankError::ParseError { line: Some(5), .. })
        ));
    }

    #[test]
    fn test_line_numbers_follow_multiline_fields() {
        let file = create_temp_csv(
            "new_client,12345678901,,,Ana,01-02-1990,\"Rua A, 10\nCentro\"\n\
             deposit,12345678901,1,,,,\n",
        );

        let results: Vec<_> = ScriptReader::new(file.path()).unwrap().collect();

        assert_eq!(results.len(), 2);
        assert!(matches!(
            &results[0],
            Ok(Command::NewClient { address, .. }) if address == "Rua A, 10\nCentro"
        ));
        assert_eq!(
            results[1].as_ref().unwrap_err().to_string(),
            "CSV parse error at line 4: deposit requires the 'amount' field"
        );
    }

    #[test]
    fn test_handles_whitespace() {
        let file = create_temp_csv("  deposit  , 12345678901 , 2 ,  7.25  ,,,\n");

        let commands: Vec<_> = ScriptReader::new(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(
            commands,
            vec![Command::Transaction {
                kind: TransactionKind::Deposit,
                identity: "12345678901".to_string(),
                account: 2,
                amount: Decimal::new(725, 2),
            }]
        );
    }

    #[test]
    fn test_empty_script() {
        let file = create_temp_csv("");
        assert_eq!(ScriptReader::new(file.path()).unwrap().count(), 0);
    }
}
