//! Account operations for an active session
//!
//! The `Atm` owns the account store and the authenticated account. Every
//! mutation computes the new account, persists it, and only then replaces
//! the in-memory copy: an operation either changes both or neither.
//!
//! Amounts are checked exactly as entered. Anything finer than a cent is
//! rejected rather than rounded, so the stored balance is always the exact
//! result of the accepted operations.

use crate::core::traits::AccountStore;
use crate::types::{ensure_cents, Account, AtmError};
use rust_decimal::Decimal;

/// An authenticated session over a single account
pub struct Atm<S: AccountStore> {
    store: S,
    account: Account,
}

impl<S: AccountStore> Atm<S> {
    /// Wrap an account obtained from setup or login
    pub fn new(store: S, account: Account) -> Self {
        Atm { store, account }
    }

    /// Current balance; no side effects
    pub fn balance(&self) -> Decimal {
        self.account.balance
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add funds and persist
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if `amount <= 0`
    /// - `TooManyDecimals` if `amount` is not a whole number of cents
    /// - `ArithmeticOverflow` if the balance would leave the decimal range
    /// - `IoError` if the record cannot be written; the balance is unchanged
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AtmError> {
        if amount <= Decimal::ZERO {
            return Err(AtmError::non_positive_amount("Deposit", amount));
        }
        ensure_cents(amount)?;

        let new_balance = self
            .account
            .balance
            .checked_add(amount)
            .ok_or_else(|| AtmError::arithmetic_overflow("deposit"))?;

        self.commit(new_balance)?;
        tracing::info!(%amount, balance = %new_balance, "Deposit applied");
        Ok(new_balance)
    }

    /// Remove funds and persist
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if `amount <= 0`
    /// - `InsufficientFunds` if `amount` exceeds the balance
    /// - `TooManyDecimals` if `amount` is not a whole number of cents
    /// - `IoError` if the record cannot be written; the balance is unchanged
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AtmError> {
        if amount <= Decimal::ZERO {
            return Err(AtmError::non_positive_amount("Withdrawal", amount));
        }

        if amount > self.account.balance {
            tracing::debug!(%amount, balance = %self.account.balance, "Withdrawal rejected");
            return Err(AtmError::insufficient_funds(self.account.balance, amount));
        }
        ensure_cents(amount)?;

        let new_balance = self
            .account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AtmError::arithmetic_overflow("withdrawal"))?;

        self.commit(new_balance)?;
        tracing::info!(%amount, balance = %new_balance, "Withdrawal applied");
        Ok(new_balance)
    }

    fn commit(&mut self, balance: Decimal) -> Result<(), AtmError> {
        let updated = self.account.with_balance(balance);
        self.store.save(&updated)?;
        self.account = updated;
        Ok(())
    }
}
