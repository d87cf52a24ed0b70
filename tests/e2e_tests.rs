//! End-to-end integration tests
//!
//! These tests drive complete sessions through the public `run` entry point.
//! Each test:
//! 1. Points a file-backed store at a temporary directory
//! 2. Feeds scripted keyboard input through the line terminal
//! 3. Checks the session result, the transcript and the account file
//!
//! Sessions are chained against the same file to cover first-run setup
//! followed by later logins.

#[cfg(test)]
mod tests {
    use mini_atm::{AtmError, FileAccountStore, LineTerminal};
    use rstest::rstest;
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Run one session against `path` with the given input lines
    ///
    /// Returns the session result and everything written to the terminal.
    fn run_session(path: &Path, lines: &[&str]) -> (Result<(), AtmError>, String) {
        let mut input = lines.join("\n");
        input.push('\n');
        let mut terminal = LineTerminal::new(Cursor::new(input.into_bytes()), Vec::new());

        let result = mini_atm::run(FileAccountStore::new(path), &mut terminal);

        let transcript = String::from_utf8(terminal.into_output())
            .unwrap_or_else(|e| panic!("Terminal output is not UTF-8: {}", e));
        (result, transcript)
    }

    fn account_path(dir: &TempDir) -> PathBuf {
        dir.path().join("account.txt")
    }

    fn read_record(path: &Path) -> String {
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    #[test]
    fn test_setup_deposit_withdraw_scenario() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = account_path(&dir);

        // First run: setup with an empty opening balance, deposit 1000.00
        let (result, transcript) =
            run_session(&path, &["1234", "1234", "0", "2", "1000.00", "", "4"]);
        assert_eq!(result, Ok(()));
        assert!(transcript.contains("Account setup successful!"));
        assert_eq!(read_record(&path), "1234\n1000.00\n");

        // Second run: withdraw 200.00, then try 900.00
        let (result, transcript) = run_session(
            &path,
            &["1234", "3", "200.00", "", "3", "900.00", "", "1", "", "4"],
        );
        assert_eq!(result, Ok(()));
        assert!(transcript.contains("Your new balance is: $800.00"));
        assert!(transcript.contains("Insufficient funds. Your balance is $800.00"));
        assert!(transcript.contains("Your current account balance is: $800.00"));
        assert_eq!(read_record(&path), "1234\n800.00\n");
    }

    #[test]
    fn test_initial_deposit_is_persisted() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = account_path(&dir);

        let (result, _) = run_session(&path, &["0007", "0007", "1000.00", "4"]);

        assert_eq!(result, Ok(()));
        assert_eq!(read_record(&path), "0007\n1000.00\n");
    }

    #[test]
    fn test_lockout_keeps_record_unchanged() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = account_path(&dir);
        fs::write(&path, "1234\n500.00\n").unwrap();

        let (result, transcript) = run_session(&path, &["1111", "2222", "3333"]);

        assert_eq!(result, Err(AtmError::TooManyFailedLogins { attempts: 3 }));
        assert!(result.unwrap_err().is_fatal());
        assert!(transcript.contains("You have 1 attempt(s) left."));
        assert_eq!(read_record(&path), "1234\n500.00\n");
    }

    #[rstest]
    #[case::empty_file("")]
    #[case::missing_balance("1234\n")]
    #[case::garbage_balance("1234\nabc\n")]
    fn test_corrupt_record_is_fatal(#[case] contents: &str) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = account_path(&dir);
        fs::write(&path, contents).unwrap();

        let (result, _) = run_session(&path, &["1234", "4"]);

        let error = result.unwrap_err();
        assert!(matches!(error, AtmError::CorruptStorage { .. }));
        assert!(error.to_string().contains("Please delete"));
        assert_eq!(read_record(&path), contents);
    }

    #[test]
    fn test_rejected_amounts_do_not_touch_the_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = account_path(&dir);
        fs::write(&path, "4321\n50.00\n").unwrap();

        let (result, transcript) = run_session(
            &path,
            &["4321", "2", "-10", "", "2", "abc", "", "3", "0", "", "3", "50.01", "", "4"],
        );

        assert_eq!(result, Ok(()));
        assert!(transcript.contains("Deposit amount must be positive"));
        assert!(transcript.contains("Invalid amount 'abc'"));
        assert!(transcript.contains("Withdrawal amount must be positive"));
        assert!(transcript.contains("Insufficient funds"));
        assert_eq!(read_record(&path), "4321\n50.00\n");
    }

    #[test]
    fn test_input_closed_during_setup_writes_nothing() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = account_path(&dir);

        let (result, _) = run_session(&path, &["1234", "1234"]);

        assert_eq!(result, Err(AtmError::InputClosed));
        assert!(!path.exists());
    }
}
