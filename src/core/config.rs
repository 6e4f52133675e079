//! Bank configuration
//!
//! Policy applied to every account the bank opens.

use crate::types::{AccountKind, DEFAULT_MAX_WITHDRAWALS, DEFAULT_WITHDRAWAL_LIMIT};
use rust_decimal::Decimal;

/// Default branch code
pub const DEFAULT_BRANCH: &str = "0001";

/// Account policy configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BankConfig {
    /// Branch code attached to every account
    pub branch: String,

    /// Per-withdrawal ceiling of checking accounts
    pub withdrawal_limit: Decimal,

    /// Maximum number of withdrawals on a checking account
    pub max_withdrawals: usize,
}

impl BankConfig {
    /// Create a configuration, falling back to defaults for invalid values
    ///
    /// An empty branch or a non-positive withdrawal limit is replaced by the
    /// default and a warning is logged.
    pub fn new(branch: &str, withdrawal_limit: Decimal, max_withdrawals: usize) -> Self {
        let default = Self::default();

        let branch = if branch.trim().is_empty() {
            tracing::warn!("empty branch code, using default {}", default.branch);
            default.branch
        } else {
            branch.trim().to_string()
        };

        let withdrawal_limit = if withdrawal_limit <= Decimal::ZERO {
            tracing::warn!(
                "withdrawal limit {} must be positive, using default {}",
                withdrawal_limit,
                default.withdrawal_limit
            );
            default.withdrawal_limit
        } else {
            withdrawal_limit
        };

        BankConfig {
            branch,
            withdrawal_limit,
            max_withdrawals,
        }
    }

    /// Account kind for newly opened checking accounts
    pub fn checking_kind(&self) -> AccountKind {
        AccountKind::checking(self.withdrawal_limit, self.max_withdrawals)
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            branch: DEFAULT_BRANCH.to_string(),
            withdrawal_limit: DEFAULT_WITHDRAWAL_LIMIT,
            max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
        }
    }
}
