//! Core traits for account persistence and terminal interaction
//!
//! This module defines the trait abstractions that let the session and menu
//! logic run against a real file and console, or against in-memory and
//! scripted implementations in tests.

use crate::types::{Account, AtmError};

/// Trait for persisting the single account record
///
/// Implementations can be file-backed or in-memory.
pub trait AccountStore {
    /// Whether an account record is present
    fn exists(&self) -> bool;

    /// Read the account record
    ///
    /// Returns `Ok(None)` when no record exists and `CorruptStorage` when a
    /// record exists but cannot be interpreted.
    fn load(&self) -> Result<Option<Account>, AtmError>;

    /// Replace the account record
    ///
    /// From the caller's perspective the write is all-or-nothing.
    fn save(&mut self, account: &Account) -> Result<(), AtmError>;

    /// Human-readable location of the record, used in error messages
    fn location(&self) -> String;
}

/// Trait for user interaction
///
/// Prompts are passed without a trailing separator; implementations decide
/// how to render them.
pub trait Terminal {
    /// Read a line of echoed input, without the line terminator
    fn read_line(&mut self, prompt: &str) -> Result<String, AtmError>;

    /// Read a line of secret input (not echoed where the terminal allows it)
    fn read_secret(&mut self, prompt: &str) -> Result<String, AtmError>;

    /// Display a message followed by a newline
    fn show(&mut self, message: &str) -> Result<(), AtmError>;

    /// Clear the screen
    fn clear(&mut self) -> Result<(), AtmError>;

    /// Wait for the user to acknowledge before continuing
    fn pause(&mut self, prompt: &str) -> Result<(), AtmError> {
        self.read_line(prompt).map(|_| ())
    }
}
