//! Error types for the Mini ATM
//!
//! This module defines all error types that can occur during a session.
//! Errors are designed to be descriptive and user-friendly for terminal output.
//!
//! # Error Categories
//!
//! - **Storage Errors**: Corrupt or missing account record, file I/O failures
//! - **Authentication Errors**: Malformed PIN, PIN mismatch, lockout
//! - **Amount Errors**: Non-numeric, negative or non-positive amounts, sub-cent precision,
//!   insufficient funds
//! - **Terminal Errors**: Input stream closed
//!
//! Fatal errors end the session and are returned to the entry point, which
//! decides on process termination. Every other error is reported to the user
//! and leaves the account unchanged.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ATM
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmError {
    /// The account file exists but does not hold a valid record
    ///
    /// Fatal. No recovery is attempted; the user must delete the file.
    #[error("Account file is corrupt ({reason}). Please delete '{path}' and restart.")]
    CorruptStorage {
        /// Path of the account file
        path: String,
        /// What was wrong with the record
        reason: String,
    },

    /// Login was entered but no account record could be found
    ///
    /// Fatal. Does not occur under normal sequencing.
    #[error("Account file '{path}' not found. Critical error.")]
    AccountMissingAfterCheck {
        /// Path of the account file
        path: String,
    },

    /// PIN is not exactly four ASCII digits
    #[error("Invalid PIN. Must be exactly 4 digits.")]
    InvalidPinFormat,

    /// PIN confirmation or login PIN did not match
    #[error("PINs do not match. Please try again.")]
    PinMismatch,

    /// Entered amount is not a number
    #[error("Invalid amount '{input}'. Please enter a number.")]
    InvalidAmount {
        /// The raw input
        input: String,
    },

    /// Initial deposit below zero
    #[error("Deposit cannot be negative (got {amount}).")]
    NegativeAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Deposit or withdrawal of zero or less
    #[error("{operation} amount must be positive (got {amount}).")]
    NonPositiveAmount {
        /// Operation that rejected the amount
        operation: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Amount with a non-zero digit past the cents
    #[error("Amount {amount} has more than 2 decimal places.")]
    TooManyDecimals {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds. Your balance is ${balance:.2}, requested ${requested}")]
    InsufficientFunds {
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// The new balance would not fit the decimal range
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Login attempts exhausted
    ///
    /// Fatal. Stored state is untouched.
    #[error("Too many failed attempts ({attempts}). Exiting for security.")]
    TooManyFailedLogins {
        /// Number of attempts made
        attempts: u32,
    },

    /// I/O error while reading or writing the account file or the terminal
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Terminal input reached end of stream
    #[error("Input stream closed")]
    InputClosed,
}

impl From<std::io::Error> for AtmError {
    fn from(error: std::io::Error) -> Self {
        AtmError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<dialoguer::Error> for AtmError {
    fn from(error: dialoguer::Error) -> Self {
        match error {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
                AtmError::InputClosed
            }
            dialoguer::Error::IO(io) => io.into(),
            #[allow(unreachable_patterns)]
            other => AtmError::IoError {
                message: other.to_string(),
            },
        }
    }
}

impl AtmError {
    /// Create a CorruptStorage error
    pub fn corrupt_storage(path: &str, reason: &str) -> Self {
        AtmError::CorruptStorage {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an AccountMissingAfterCheck error
    pub fn account_missing(path: &str) -> Self {
        AtmError::AccountMissingAfterCheck {
            path: path.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        AtmError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(operation: &str, amount: Decimal) -> Self {
        AtmError::NonPositiveAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        AtmError::InsufficientFunds { balance, requested }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AtmError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Whether this error must end the session
    ///
    /// Fatal errors propagate to the entry point. All other errors are shown
    /// to the user and the current step is retried or abandoned.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AtmError::CorruptStorage { .. }
                | AtmError::AccountMissingAfterCheck { .. }
                | AtmError::TooManyFailedLogins { .. }
                | AtmError::IoError { .. }
                | AtmError::InputClosed
        )
    }
}
