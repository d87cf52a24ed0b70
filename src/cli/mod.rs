// CLI module
// The only option is `--account-file`, the path of the account record

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse the `--account-file` option, defaulting to `account.txt`
///
/// If parsing fails (unknown flag, or --help), clap displays an error or
/// the help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
