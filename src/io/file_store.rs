//! File-backed account store
//!
//! Persists the account as a two-line text record. Writes go to a temporary
//! file in the same directory which is then renamed over the target, so a
//! reader never observes a half-written record.

use crate::core::traits::AccountStore;
use crate::io::record_format::{format_record, parse_record};
use crate::types::{Account, AtmError};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default account file name, relative to the working directory
pub const DEFAULT_ACCOUNT_FILE: &str = "account.txt";

/// Account store backed by a single text file
#[derive(Debug, Clone)]
pub struct FileAccountStore {
    path: PathBuf,
}

impl FileAccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileAccountStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that receives the temporary file during a write
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl Default for FileAccountStore {
    fn default() -> Self {
        FileAccountStore::new(DEFAULT_ACCOUNT_FILE)
    }
}

impl AccountStore for FileAccountStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<Option<Account>, AtmError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match parse_record(&contents, &self.location()) {
            Ok(account) => Ok(Some(account)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Account record rejected");
                Err(e)
            }
        }
    }

    fn save(&mut self, account: &Account) -> Result<(), AtmError> {
        let mut temp = NamedTempFile::new_in(self.parent_dir())?;
        temp.write_all(format_record(account).as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| AtmError::from(e.error))?;

        tracing::debug!(path = %self.path.display(), "Account record written");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pin;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileAccountStore {
        FileAccountStore::new(dir.path().join("account.txt"))
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_writes_two_line_record() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let account = Account::new(Pin::parse("1234").unwrap(), dec!(1000));

        store.save(&account).unwrap();

        assert!(store.exists());
        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "1234\n1000.00\n");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let account = Account::new(Pin::parse("0420").unwrap(), dec!(33.3));

        store.save(&account).unwrap();

        assert_eq!(store.load().unwrap(), Some(account));
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let account = Account::new(Pin::parse("1234").unwrap(), dec!(1000));

        store.save(&account).unwrap();
        store.save(&account.with_balance(dec!(800))).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "1234\n800.00\n");
        // Only the record remains, no stray temporary files
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "1234\n").unwrap();

        let result = store.load();

        assert!(matches!(result, Err(AtmError::CorruptStorage { .. })));
        assert!(result.unwrap_err().to_string().contains("account.txt"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = FileAccountStore::new(dir.path().join("missing").join("account.txt"));
        let account = Account::new(Pin::parse("1234").unwrap(), dec!(1));

        let result = store.save(&account);

        assert!(matches!(result, Err(AtmError::IoError { .. })));
    }

    #[test]
    fn test_default_path() {
        let store = FileAccountStore::default();
        assert_eq!(store.path(), Path::new(DEFAULT_ACCOUNT_FILE));
        assert_eq!(store.parent_dir(), Path::new("."));
    }
}
