//! Mini ATM CLI
//!
//! Interactive console ATM backed by a single account file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --account-file /path/to/account.txt
//! RUST_LOG=mini_atm=debug cargo run
//! ```
//!
//! On first run the program walks through account setup. Afterwards it asks
//! for the PIN and shows the main menu. When stdin is not a terminal, input
//! is read line by line (PIN entry is then visible).
//!
//! # Exit Codes
//!
//! - 0: User chose Exit
//! - 1: Fatal error (corrupt account file, too many failed logins, closed input, I/O error)

use mini_atm::io::{ConsoleTerminal, FileAccountStore, LineTerminal};
use mini_atm::{cli, logging};
use std::io::IsTerminal;
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init_tracing();

    let store = FileAccountStore::new(args.account_file);

    let result = if std::io::stdin().is_terminal() {
        mini_atm::run(store, &mut ConsoleTerminal::new())
    } else {
        mini_atm::run(store, &mut LineTerminal::stdio())
    };

    if let Err(e) = result {
        eprintln!("\n[!] {}", e);
        process::exit(1);
    }
}
