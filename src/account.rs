use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),
    #[error("Transfer target is missing")]
    MissingTarget,
}

#[derive(Debug, Default)]
pub struct Account {
    balance: Decimal,
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    /// The initial balance is taken as-is, without validation. A negative
    /// opening balance is representable on this path only.
    pub fn with_balance(initial: Decimal) -> Self {
        Self { balance: initial }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount < Decimal::zero() {
            debug!(%amount, "deposit rejected");
            return Err(AccountError::InvalidAmount(amount));
        }
        self.balance += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount > self.balance {
            debug!(%amount, balance = %self.balance, "withdrawal rejected");
            return Err(AccountError::InvalidAmount(amount));
        }
        if amount < Decimal::zero() {
            debug!(%amount, "withdrawal rejected");
            return Err(AccountError::InvalidAmount(amount));
        }
        self.balance -= amount;
        Ok(())
    }

    /// Moves `amount` from this account into `target`: a withdrawal here
    /// followed by a deposit there, as two independent steps. The deposit
    /// cannot fail for any amount the withdrawal permits, so no partial
    /// state is reachable today; any extension that lets `deposit` fail on
    /// other grounds must revisit this sequencing.
    pub fn transfer_to(
        &mut self,
        target: Option<&mut Account>,
        amount: Decimal,
    ) -> Result<(), AccountError> {
        let Some(target) = target else {
            debug!(%amount, "transfer rejected, no target account");
            return Err(AccountError::MissingTarget);
        };
        self.withdraw(amount)?;
        target.deposit(amount)
    }
}
