use crate::io::DEFAULT_ACCOUNT_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Console ATM with a PIN-protected, file-backed account
#[derive(Parser, Debug)]
#[command(name = "mini-atm")]
#[command(about = "Console ATM with a PIN-protected, file-backed account", long_about = None)]
pub struct CliArgs {
    /// Path of the account record
    #[arg(
        long = "account-file",
        value_name = "PATH",
        default_value = DEFAULT_ACCOUNT_FILE,
        help = "Path of the account file (created on first run)"
    )]
    pub account_file: PathBuf,
}
