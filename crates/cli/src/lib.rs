//! Interactive console front end for the comb inventory.
//!
//! The binary in `main.rs` only wires stdin/stdout and the data path;
//! everything here runs against injected readers and writers so tests can
//! drive whole sessions from in-memory buffers.

pub mod commands;
pub mod console;
pub mod menu;
pub mod session;

pub use console::Console;
pub use menu::MenuChoice;
pub use session::Session;
