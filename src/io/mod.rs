//! I/O module
//!
//! Handles account persistence and terminal interaction.
//!
//! # Components
//!
//! - `record_format` - Two-line account record format (pure parsing and rendering)
//! - `file_store` - File-backed account store with atomic replacement
//! - `memory_store` - In-memory account store
//! - `console_terminal` - Interactive console with hidden PIN entry
//! - `line_terminal` - Line-oriented terminal over arbitrary streams

pub mod console_terminal;
pub mod file_store;
pub mod line_terminal;
pub mod memory_store;
pub mod record_format;

pub use console_terminal::ConsoleTerminal;
pub use file_store::{FileAccountStore, DEFAULT_ACCOUNT_FILE};
pub use line_terminal::LineTerminal;
pub use memory_store::MemoryAccountStore;
pub use record_format::{format_record, parse_record};
