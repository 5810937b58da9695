//! Interactive interface for pusher.
//!
//! A numbered menu drives every operation. The menu loop lives in `menu`,
//! the actions in `commands`.

/// Individual menu action implementations.
pub mod commands;

pub mod menu;
pub mod session;
pub mod terminal;

pub use session::Session;
pub use terminal::Terminal;
