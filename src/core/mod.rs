//! Core business logic module
//!
//! This module contains the session and menu components:
//! - `traits` - Trait abstractions for storage and terminal interaction
//! - `session` - First-run setup and PIN login
//! - `atm` - Balance operations on an authenticated account
//! - `menu` - Interactive menu loop

pub mod atm;
pub mod menu;
pub mod session;
pub mod traits;

pub use atm::Atm;
pub use menu::{run_menu, MenuChoice};
pub use session::{start, MAX_LOGIN_ATTEMPTS};
pub use traits::{AccountStore, Terminal};
