//! Mini ATM Library
//! # Overview
//!
//! This library implements a single-user console ATM: one PIN-protected
//! account whose balance is persisted to a two-line text file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Pin, AtmError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::session`] - First-run setup and PIN login with lockout
//!   - [`core::atm`] - Balance inquiry, deposit and withdrawal
//!   - [`core::menu`] - Interactive menu loop
//! - [`io`] - Account storage and terminal implementations
//! - [`logging`] - Diagnostic tracing setup
//!
//! # Session Flow
//!
//! - **No account file**: setup asks for a new PIN (entered twice) and an
//!   opening deposit, then writes the account file
//! - **Existing account file**: login allows three PIN attempts
//! - **Menu**: check balance, deposit, withdraw, exit
//!
//! # Error Handling
//!
//! Nothing in the library exits the process. Fatal conditions (corrupt
//! account file, lockout, closed input, I/O failure) are returned as
//! [`AtmError`] values for which [`AtmError::is_fatal`] is true, and the
//! binary decides how to terminate.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use crate::core::{AccountStore, Atm, MenuChoice, Terminal};
pub use io::{ConsoleTerminal, FileAccountStore, LineTerminal, MemoryAccountStore};
pub use types::{Account, AtmError, Pin};

/// Run a complete session: setup or login, then the menu until exit
///
/// # Returns
///
/// * `Ok(())` when the user exits through the menu
/// * `Err(AtmError)` on the first fatal error
pub fn run<S, T>(mut store: S, terminal: &mut T) -> Result<(), AtmError>
where
    S: AccountStore,
    T: Terminal,
{
    let account = core::start(&mut store, terminal)?;
    let mut atm = Atm::new(store, account);
    core::run_menu(&mut atm, terminal)
}
