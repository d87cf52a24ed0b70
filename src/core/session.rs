//! Session establishment: first-run setup and PIN login
//!
//! A session starts in one of two ways:
//!
//! - **No account**: setup asks for a new PIN (with confirmation) and an
//!   initial deposit, persists the account, and the session becomes active.
//! - **Existing account**: login allows [`MAX_LOGIN_ATTEMPTS`] PIN entries.
//!   A match activates the session; exhausting the attempts locks the user
//!   out with a fatal error.
//!
//! Input validation lives in small functions returning `Result` so that the
//! prompting loops only decide whether to retry.

use crate::core::traits::{AccountStore, Terminal};
use crate::types::{ensure_cents, parse_amount, Account, AtmError, Pin};
use rust_decimal::Decimal;

/// Number of PIN entries allowed before lockout
pub const MAX_LOGIN_ATTEMPTS: u32 = 3;

/// Validate a newly chosen PIN
pub fn validate_pin(input: &str) -> Result<Pin, AtmError> {
    Pin::parse(input)
}

/// Check that the confirmation repeats the chosen PIN exactly
pub fn confirm_pin(pin: Pin, confirmation: &str) -> Result<Pin, AtmError> {
    if pin.matches(confirmation) {
        Ok(pin)
    } else {
        Err(AtmError::PinMismatch)
    }
}

/// Validate the opening balance entered during setup
///
/// Zero is allowed; negative amounts, fractions of a cent and non-numbers
/// are not.
pub fn validate_initial_deposit(input: &str) -> Result<Decimal, AtmError> {
    let amount = parse_amount(input)?;
    if amount < Decimal::ZERO {
        return Err(AtmError::NegativeAmount { amount });
    }
    ensure_cents(amount)
}

/// Establish an active session
///
/// Runs setup when the store has no record, login otherwise.
pub fn start<S, T>(store: &mut S, terminal: &mut T) -> Result<Account, AtmError>
where
    S: AccountStore,
    T: Terminal,
{
    if store.exists() {
        login(store, terminal)
    } else {
        setup(store, terminal)
    }
}

/// First-run setup
///
/// Re-prompts for as long as the input is invalid. Only fatal errors (closed
/// input, failed write) end the loop early.
pub fn setup<S, T>(store: &mut S, terminal: &mut T) -> Result<Account, AtmError>
where
    S: AccountStore,
    T: Terminal,
{
    terminal.clear()?;
    terminal.show("~~~ Welcome to Mini ATM Setup ~~~")?;
    terminal.show("Since this is your first time, let's set up your account.")?;

    let pin = prompt_until_valid(terminal, |terminal| {
        let pin = validate_pin(&terminal.read_secret("Please create a 4-digit PIN")?)?;
        let confirmation = terminal.read_secret("Please confirm your PIN")?;
        confirm_pin(pin, &confirmation)
    })?;

    let balance = prompt_until_valid(terminal, |terminal| {
        validate_initial_deposit(
            &terminal.read_line("Enter your initial deposit amount (e.g., 1000.00)")?,
        )
    })?;

    let account = Account::new(pin, balance);
    store.save(&account)?;
    tracing::info!(balance = %account.balance, "Account created");

    terminal.show("\nAccount setup successful!")?;
    Ok(account)
}

/// PIN login against the stored record
///
/// # Errors
///
/// - `AccountMissingAfterCheck` if the store holds no record
/// - `CorruptStorage` if the record cannot be read
/// - `TooManyFailedLogins` after [`MAX_LOGIN_ATTEMPTS`] mismatches
pub fn login<S, T>(store: &S, terminal: &mut T) -> Result<Account, AtmError>
where
    S: AccountStore,
    T: Terminal,
{
    terminal.clear()?;
    terminal.show("Welcome to Mini ATM")?;

    let account = store
        .load()?
        .ok_or_else(|| AtmError::account_missing(&store.location()))?;

    let mut remaining = MAX_LOGIN_ATTEMPTS;
    while remaining > 0 {
        let entered = terminal.read_secret("Please enter your 4-digit PIN")?;
        if account.pin.matches(&entered) {
            tracing::info!("Login successful");
            terminal.show("\nLogin successful!")?;
            return Ok(account);
        }

        remaining -= 1;
        tracing::warn!(attempts_remaining = remaining, "Failed login attempt");
        if remaining > 0 {
            terminal.show(&format!(
                "[!] Invalid PIN. You have {} attempt(s) left.",
                remaining
            ))?;
        }
    }

    Err(AtmError::TooManyFailedLogins {
        attempts: MAX_LOGIN_ATTEMPTS,
    })
}

/// Run `attempt` until it succeeds, reporting recoverable errors in between
fn prompt_until_valid<T, V, F>(terminal: &mut T, mut attempt: F) -> Result<V, AtmError>
where
    T: Terminal,
    F: FnMut(&mut T) -> Result<V, AtmError>,
{
    loop {
        match attempt(terminal) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => terminal.show(&format!("[!] {}\n", e))?,
        }
    }
}
