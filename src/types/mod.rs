//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account, PIN and amount handling
//! - `error`: Error types for the ATM

pub mod account;
pub mod error;

pub use account::{ensure_cents, parse_amount, round_to_cents, Account, Pin, CENT_SCALE, PIN_LENGTH};
pub use error::AtmError;
