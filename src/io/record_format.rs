//! Account record format handling
//!
//! The account file holds two newline-terminated lines:
//!
//! ```text
//! 1234
//! 1000.00
//! ```
//!
//! Line 1 is the PIN, line 2 the balance with exactly two fractional digits.
//! All functions are pure (no I/O) for easy testing.

use crate::types::{round_to_cents, Account, AtmError, Pin};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Render an account as the two-line record
pub fn format_record(account: &Account) -> String {
    format!(
        "{}\n{:.2}\n",
        account.pin.as_str(),
        round_to_cents(account.balance)
    )
}

/// Parse the two-line record
///
/// Each line is trimmed before interpretation. Lines after the second are
/// ignored.
///
/// # Arguments
///
/// * `contents` - Full file contents
/// * `path` - File location, used in the error message
///
/// # Errors
///
/// Returns `CorruptStorage` if either line is missing or empty, the PIN is
/// not four digits, or the balance is not a non-negative number.
pub fn parse_record(contents: &str, path: &str) -> Result<Account, AtmError> {
    let mut lines = contents.lines().map(str::trim);
    let pin_line = lines.next().unwrap_or_default();
    let balance_line = lines.next().unwrap_or_default();

    if pin_line.is_empty() || balance_line.is_empty() {
        return Err(AtmError::corrupt_storage(path, "missing PIN or balance line"));
    }

    let pin = Pin::parse(pin_line)
        .map_err(|_| AtmError::corrupt_storage(path, "PIN is not 4 digits"))?;

    let balance = Decimal::from_str(balance_line)
        .map_err(|_| AtmError::corrupt_storage(path, "balance is not a number"))?;

    if balance.is_sign_negative() && !balance.is_zero() {
        return Err(AtmError::corrupt_storage(path, "balance is negative"));
    }

    Ok(Account::new(pin, balance))
}
