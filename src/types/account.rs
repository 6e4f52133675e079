//! Account-related types for the banking ledger
//!
//! An [`Account`] holds a balance, its number and branch, the identity of the
//! client that owns it, and the history of its successful movements. The
//! account kind decides which extra withdrawal policy applies.

use super::client::Identity;
use super::error::BankError;
use super::history::History;
use super::transaction::{AccountNumber, TransactionKind};
use rust_decimal::Decimal;

/// Default per-withdrawal ceiling of a checking account
pub const DEFAULT_WITHDRAWAL_LIMIT: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Default number of withdrawals allowed on a checking account
pub const DEFAULT_MAX_WITHDRAWALS: usize = 3;

/// Account variants and the policy each one carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// No policy beyond a positive amount and a sufficient balance
    Basic,

    /// Checking account
    ///
    /// A withdrawal must not exceed `withdrawal_limit`, and at most
    /// `max_withdrawals` withdrawals are accepted over the account's whole
    /// history.
    Checking {
        withdrawal_limit: Decimal,
        max_withdrawals: usize,
    },
}

impl AccountKind {
    pub fn checking(withdrawal_limit: Decimal, max_withdrawals: usize) -> Self {
        AccountKind::Checking {
            withdrawal_limit,
            max_withdrawals,
        }
    }
}

impl Default for AccountKind {
    fn default() -> Self {
        AccountKind::checking(DEFAULT_WITHDRAWAL_LIMIT, DEFAULT_MAX_WITHDRAWALS)
    }
}

/// Client account state
///
/// # Invariants
///
/// - `balance` equals the recorded deposits minus the recorded withdrawals
/// - `balance` is never negative
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    branch: String,
    balance: Decimal,
    owner: Identity,
    kind: AccountKind,
    history: History,
}

impl Account {
    /// Create a new account with a zero balance and an empty history
    ///
    /// # Arguments
    ///
    /// * `number` - Account number, unique within the bank
    /// * `branch` - Branch code
    /// * `owner` - Identity of the client owning the account
    /// * `kind` - Account variant
    pub fn new(number: AccountNumber, branch: &str, owner: Identity, kind: AccountKind) -> Self {
        Account {
            number,
            branch: branch.to_string(),
            balance: Decimal::ZERO,
            owner,
            kind,
            history: History::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Deposit funds into the account
    ///
    /// Only the balance changes; recording the movement in the history is
    /// done by [`Transaction::apply`](super::transaction::Transaction::apply).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - Adding the amount to the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount, "deposit"));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", self.number))?;

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// Checking accounts first verify the withdrawal ceiling and the
    /// withdrawal count; the base checks then require a positive amount that
    /// does not exceed the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount exceeds the checking account's withdrawal limit
    /// - The checking account already recorded its maximum of withdrawals
    /// - The amount is zero or negative
    /// - The amount exceeds the balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        if let AccountKind::Checking {
            withdrawal_limit,
            max_withdrawals,
        } = self.kind
        {
            let withdrawals = self.history.count(TransactionKind::Withdrawal);

            if amount > withdrawal_limit {
                return Err(BankError::limit_exceeded(
                    self.number,
                    withdrawal_limit,
                    amount,
                ));
            }

            if withdrawals >= max_withdrawals {
                return Err(BankError::daily_count_exceeded(
                    self.number,
                    max_withdrawals,
                ));
            }
        }

        self.withdraw_funds(amount)
    }

    fn withdraw_funds(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount, "withdrawal"));
        }

        if amount > self.balance {
            return Err(BankError::insufficient_funds(
                self.number,
                self.balance,
                amount,
            ));
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal", self.number))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn owner() -> Identity {
        Identity::parse("12345678901").unwrap()
    }

    fn basic_account() -> Account {
        Account::new(1, "0001", owner(), AccountKind::Basic)
    }

    fn checking_account() -> Account {
        Account::new(2, "0001", owner(), AccountKind::default())
    }

    #[test]
    fn test_new_account_is_empty() {
        let account = checking_account();

        assert_eq!(account.number(), 2);
        assert_eq!(account.branch(), "0001");
        assert_eq!(account.balance(), Decimal::ZERO);
        assert_eq!(account.owner().as_str(), "12345678901");
        assert!(account.history().is_empty());
        assert_eq!(
            account.kind(),
            AccountKind::Checking {
                withdrawal_limit: Decimal::from(500),
                max_withdrawals: 3
            }
        );
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut account = basic_account();

        account.deposit(Decimal::new(10050, 2)).unwrap();
        account.deposit(Decimal::new(50, 2)).unwrap();

        assert_eq!(account.balance(), Decimal::from(101));
    }

    #[test]
    fn test_deposit_does_not_touch_history() {
        let mut account = basic_account();
        account.deposit(Decimal::from(10)).unwrap();
        assert!(account.history().is_empty());
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-100, 2))]
    fn test_deposit_rejects_non_positive_amount(#[case] amount: Decimal) {
        let mut account = basic_account();

        let result = account.deposit(amount);

        assert!(matches!(result, Err(BankError::InvalidAmount { .. })));
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_overflow_leaves_balance_unchanged() {
        let mut account = basic_account();
        account.deposit(Decimal::MAX).unwrap();

        let result = account.deposit(Decimal::ONE);

        assert!(matches!(result, Err(BankError::ArithmeticOverflow { .. })));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut account = basic_account();
        account.deposit(Decimal::from(100)).unwrap();

        account.withdraw(Decimal::from(100)).unwrap();

        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::from(-5))]
    fn test_withdraw_rejects_non_positive_amount(#[case] amount: Decimal) {
        let mut account = basic_account();
        account.deposit(Decimal::from(100)).unwrap();

        let result = account.withdraw(amount);

        assert!(matches!(result, Err(BankError::InvalidAmount { .. })));
        assert_eq!(account.balance(), Decimal::from(100));
    }

    #[test]
    fn test_withdraw_rejects_amount_above_balance() {
        let mut account = basic_account();
        account.deposit(Decimal::from(100)).unwrap();

        let result = account.withdraw(Decimal::new(10001, 2));

        assert_eq!(
            result,
            Err(BankError::insufficient_funds(
                1,
                Decimal::from(100),
                Decimal::new(10001, 2)
            ))
        );
        assert_eq!(account.balance(), Decimal::from(100));
    }

    #[test]
    fn test_basic_account_has_no_limit() {
        let mut account = basic_account();
        account.deposit(Decimal::from(10_000)).unwrap();

        account.withdraw(Decimal::from(600)).unwrap();

        assert_eq!(account.balance(), Decimal::from(9_400));
    }

    #[test]
    fn test_checking_rejects_amount_above_limit_even_with_funds() {
        let mut account = checking_account();
        account.deposit(Decimal::from(1000)).unwrap();

        let result = account.withdraw(Decimal::from(600));

        assert_eq!(
            result,
            Err(BankError::limit_exceeded(
                2,
                Decimal::from(500),
                Decimal::from(600)
            ))
        );
        assert_eq!(account.balance(), Decimal::from(1000));
    }

    #[test]
    fn test_checking_accepts_amount_equal_to_limit() {
        let mut account = checking_account();
        account.deposit(Decimal::from(1000)).unwrap();

        assert!(account.withdraw(Decimal::from(500)).is_ok());
        assert_eq!(account.balance(), Decimal::from(500));
    }

    #[test]
    fn test_checking_limit_checked_before_balance() {
        let mut account = checking_account();

        let result = account.withdraw(Decimal::from(600));

        assert!(matches!(result, Err(BankError::LimitExceeded { .. })));
    }

    #[test]
    fn test_checking_count_reads_recorded_withdrawals() {
        let mut account = checking_account();
        account.deposit(Decimal::from(1000)).unwrap();

        for _ in 0..3 {
            account
                .history_mut()
                .record(TransactionKind::Withdrawal, Decimal::ONE);
        }

        let result = account.withdraw(Decimal::from(10));

        assert_eq!(result, Err(BankError::daily_count_exceeded(2, 3)));
        assert_eq!(account.balance(), Decimal::from(1000));
    }

    #[test]
    fn test_checking_count_ignores_deposits() {
        let mut account = checking_account();
        account.deposit(Decimal::from(1000)).unwrap();

        for _ in 0..5 {
            account
                .history_mut()
                .record(TransactionKind::Deposit, Decimal::ONE);
        }

        assert!(account.withdraw(Decimal::from(10)).is_ok());
        assert_eq!(account.history().count(TransactionKind::Deposit), 5);
    }
}
