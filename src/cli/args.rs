use crate::core::config::{BankConfig, DEFAULT_BRANCH};
use crate::types::{DEFAULT_MAX_WITHDRAWALS, DEFAULT_WITHDRAWAL_LIMIT};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Replay a banking ledger script and print the resulting accounts
#[derive(Parser, Debug)]
#[command(name = "banking-ledger")]
#[command(about = "Replay a banking ledger script and print the resulting accounts", long_about = None)]
pub struct CliArgs {
    /// Input CSV script path
    #[arg(value_name = "INPUT", help = "Path to the input CSV script")]
    pub input_file: PathBuf,

    /// Per-withdrawal ceiling of checking accounts
    #[arg(
        long = "withdrawal-limit",
        value_name = "AMOUNT",
        help = "Maximum amount of a single checking account withdrawal (default: 500)"
    )]
    pub withdrawal_limit: Option<Decimal>,

    /// Maximum number of withdrawals per checking account
    #[arg(
        long = "max-withdrawals",
        value_name = "COUNT",
        help = "Maximum number of withdrawals per checking account (default: 3)"
    )]
    pub max_withdrawals: Option<usize>,

    /// Branch code for new accounts
    #[arg(
        long = "branch",
        value_name = "CODE",
        help = "Branch code attached to every account (default: 0001)"
    )]
    pub branch: Option<String>,

    /// Write account statements after the summary
    #[arg(long = "statements", help = "Also print every account's history")]
    pub statements: bool,
}

impl CliArgs {
    /// Create a BankConfig from CLI arguments
    ///
    /// Missing options take their default; invalid ones are replaced by the
    /// default with a warning (see [`BankConfig::new`]).
    pub fn to_bank_config(&self) -> BankConfig {
        BankConfig::new(
            self.branch.as_deref().unwrap_or(DEFAULT_BRANCH),
            self.withdrawal_limit.unwrap_or(DEFAULT_WITHDRAWAL_LIMIT),
            self.max_withdrawals.unwrap_or(DEFAULT_MAX_WITHDRAWALS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_options(&["program", "input.csv"], None, None, None, false)]
    #[case::limit(&["program", "--withdrawal-limit", "750.50", "input.csv"], Some(Decimal::new(75050, 2)), None, None, false)]
    #[case::max(&["program", "--max-withdrawals", "5", "input.csv"], None, Some(5), None, false)]
    #[case::branch(&["program", "--branch", "0042", "input.csv"], None, None, Some("0042"), false)]
    #[case::all_options(
        &["program", "--withdrawal-limit", "1000", "--max-withdrawals", "10", "--branch", "0002", "--statements", "input.csv"],
        Some(Decimal::from(1000)),
        Some(10),
        Some("0002"),
        true
    )]
    fn test_options(
        #[case] args: &[&str],
        #[case] limit: Option<Decimal>,
        #[case] max: Option<usize>,
        #[case] branch: Option<&str>,
        #[case] statements: bool,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from("input.csv"));
        assert_eq!(parsed.withdrawal_limit, limit);
        assert_eq!(parsed.max_withdrawals, max);
        assert_eq!(parsed.branch.as_deref(), branch);
        assert_eq!(parsed.statements, statements);
    }

    #[rstest]
    #[case::defaults(&["program", "input.csv"], "0001", Decimal::from(500), 3)]
    #[case::custom(
        &["program", "--withdrawal-limit", "200", "--max-withdrawals", "1", "--branch", "0007", "input.csv"],
        "0007",
        Decimal::from(200),
        1
    )]
    #[case::zero_limit_falls_back(&["program", "--withdrawal-limit", "0", "input.csv"], "0001", Decimal::from(500), 3)]
    #[case::zero_max_is_kept(&["program", "--max-withdrawals", "0", "input.csv"], "0001", Decimal::from(500), 0)]
    fn test_bank_config_conversion(
        #[case] args: &[&str],
        #[case] expected_branch: &str,
        #[case] expected_limit: Decimal,
        #[case] expected_max: usize,
    ) {
        let config = CliArgs::try_parse_from(args).unwrap().to_bank_config();

        assert_eq!(config.branch, expected_branch);
        assert_eq!(config.withdrawal_limit, expected_limit);
        assert_eq!(config.max_withdrawals, expected_max);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_limit(&["program", "--withdrawal-limit", "lots", "input.csv"])]
    #[case::negative_max(&["program", "--max-withdrawals", "-1", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
