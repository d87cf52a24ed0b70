//! Main menu loop
//!
//! Draws the menu, reads a choice, runs the matching operation and waits for
//! the user to press Enter before redrawing. Recoverable errors are shown to
//! the user; fatal errors end the loop and are returned to the caller.

use crate::core::atm::Atm;
use crate::core::traits::{AccountStore, Terminal};
use crate::types::{parse_amount, AtmError};

/// Menu entries, selected by the digits `1` to `4`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckBalance,
    Deposit,
    Withdraw,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection
    ///
    /// The line must be exactly one of the digits; padding is not accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::CheckBalance),
            "2" => Some(MenuChoice::Deposit),
            "3" => Some(MenuChoice::Withdraw),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU_LINES: [&str; 6] = [
    "~~~ Mini ATM Main Menu ~~~",
    "\nWhat would you like to do?",
    "  1. Check Balance",
    "  2. Deposit",
    "  3. Withdraw",
    "  4. Exit",
];

/// Run the menu until the user exits
///
/// # Returns
///
/// * `Ok(())` when the user selects Exit
/// * `Err(AtmError)` on the first fatal error
pub fn run_menu<S, T>(atm: &mut Atm<S>, terminal: &mut T) -> Result<(), AtmError>
where
    S: AccountStore,
    T: Terminal,
{
    loop {
        terminal.clear()?;
        for line in MENU_LINES {
            terminal.show(line)?;
        }

        let input = terminal.read_line("\nEnter your choice (1-4)")?;
        match MenuChoice::parse(&input) {
            Some(MenuChoice::Exit) => {
                terminal.show("\nThank you for using Mini ATM. Goodbye!")?;
                return Ok(());
            }
            Some(choice) => {
                let outcome = dispatch(choice, atm, terminal);
                report(outcome, terminal)?;
            }
            None => terminal.show("\n[!] Invalid choice. Please select 1, 2, 3, or 4.")?,
        }

        terminal.pause("\nPress Enter to return to the main menu")?;
    }
}

fn dispatch<S, T>(choice: MenuChoice, atm: &mut Atm<S>, terminal: &mut T) -> Result<(), AtmError>
where
    S: AccountStore,
    T: Terminal,
{
    match choice {
        MenuChoice::CheckBalance => check_balance(atm, terminal),
        MenuChoice::Deposit => deposit(atm, terminal),
        MenuChoice::Withdraw => withdraw(atm, terminal),
        MenuChoice::Exit => Ok(()),
    }
}

/// Show a recoverable error and carry on, or propagate a fatal one
fn report<T: Terminal>(outcome: Result<(), AtmError>, terminal: &mut T) -> Result<(), AtmError> {
    match outcome {
        Err(e) if !e.is_fatal() => terminal.show(&format!("\n[!] {}", e)),
        other => other,
    }
}

pub fn check_balance<S, T>(atm: &Atm<S>, terminal: &mut T) -> Result<(), AtmError>
where
    S: AccountStore,
    T: Terminal,
{
    terminal.show(&format!(
        "\nYour current account balance is: ${:.2}",
        atm.balance()
    ))
}

pub fn deposit<S, T>(atm: &mut Atm<S>, terminal: &mut T) -> Result<(), AtmError>
where
    S: AccountStore,
    T: Terminal,
{
    let amount = parse_amount(&terminal.read_line("\nEnter amount to deposit")?)?;
    let balance = atm.deposit(amount)?;

    terminal.show(&format!("\nDepositing ${:.2}...", amount))?;
    terminal.show("Deposit successful!")?;
    terminal.show(&format!("Your new balance is: ${:.2}", balance))
}

pub fn withdraw<S, T>(atm: &mut Atm<S>, terminal: &mut T) -> Result<(), AtmError>
where
    S: AccountStore,
    T: Terminal,
{
    let amount = parse_amount(&terminal.read_line("\nEnter amount to withdraw")?)?;
    let balance = atm.withdraw(amount)?;

    terminal.show(&format!("\nWithdrawing ${:.2}...", amount))?;
    terminal.show("Withdrawal successful!")?;
    terminal.show(&format!("Your new balance is: ${:.2}", balance))
}
