//! Shemu: UNIX Command-Line Emulator Front End
//!
//! Resolves the emulator configuration from command-line flags and an optional
//! INI file, then replays a startup script as a simulated user dialogue.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod script;
