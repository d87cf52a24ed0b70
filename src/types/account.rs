//! Account-related types for the Mini ATM
//!
//! This module defines the Account structure, the validated PIN type, and
//! the cent precision rules for monetary amounts.

use super::error::AtmError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a PIN
pub const PIN_LENGTH: usize = 4;

/// Number of fractional digits kept for balances and amounts
pub const CENT_SCALE: u32 = 2;

/// A 4-digit numeric PIN
///
/// Can only be built through [`Pin::parse`], so every value held by an
/// [`Account`] is well formed. There is no way to change a PIN once created.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    /// Validate and wrap a PIN
    ///
    /// # Errors
    ///
    /// Returns `InvalidPinFormat` unless the input is exactly four ASCII digits.
    pub fn parse(input: &str) -> Result<Self, AtmError> {
        if input.len() == PIN_LENGTH && input.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Pin(input.to_string()))
        } else {
            Err(AtmError::InvalidPinFormat)
        }
    }

    /// Exact string comparison against an entered PIN
    pub fn matches(&self, entered: &str) -> bool {
        self.0 == entered
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep PINs out of debug output and logs.
impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// The single account of an installation
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Credential checked at login
    pub pin: Pin,

    /// Current balance, never negative, held at cent precision
    pub balance: Decimal,
}

impl Account {
    /// Create an account, rounding the balance to cents
    pub fn new(pin: Pin, balance: Decimal) -> Self {
        Account {
            pin,
            balance: round_to_cents(balance),
        }
    }

    /// Copy of this account holding a different balance
    pub fn with_balance(&self, balance: Decimal) -> Self {
        Account::new(self.pin.clone(), balance)
    }
}

/// Round an amount to 2 fractional digits, midpoint away from zero
///
/// Negative zero is normalized to zero.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    let rounded = amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Parse user input into an amount, exactly as entered
///
/// Surrounding whitespace is ignored. Sign and precision are preserved;
/// range and precision checks are left to the caller.
///
/// # Errors
///
/// Returns `InvalidAmount` when the input is not a decimal number.
pub fn parse_amount(input: &str) -> Result<Decimal, AtmError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed).map_err(|_| AtmError::invalid_amount(trimmed))
}

/// Reject amounts that cannot be represented in whole cents
///
/// Trailing zeros do not count, so `1.500` is accepted.
///
/// # Errors
///
/// Returns `TooManyDecimals` when the amount has a non-zero digit past the
/// second fractional place.
pub fn ensure_cents(amount: Decimal) -> Result<Decimal, AtmError> {
    if amount.normalize().scale() > CENT_SCALE {
        return Err(AtmError::TooManyDecimals { amount });
    }
    Ok(amount)
}
