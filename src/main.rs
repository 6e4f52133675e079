//! Banking Ledger CLI
//!
//! Replays a CSV script of banking operations and prints the resulting
//! accounts as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > accounts.csv
//! cargo run -- --withdrawal-limit 1000 --max-withdrawals 5 script.csv
//! cargo run -- --statements script.csv
//! RUST_LOG=debug cargo run -- script.csv
//! ```
//!
//! # Script Format
//!
//! Columns: `op,identity,account,amount,name,birth_date,address`, where `op`
//! is one of `new_client`, `new_account`, `deposit` or `withdraw`.
//!
//! Logs go to stderr so stdout only carries CSV.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use banking_ledger::cli;
use banking_ledger::runner::ScriptRunner;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let runner = ScriptRunner::new(args.to_bank_config()).with_statements(args.statements);

    let mut output = std::io::stdout();
    if let Err(e) = runner.run(&args.input_file, &mut output) {
        tracing::error!("Error: {}", e);
        process::exit(1);
    }
}
