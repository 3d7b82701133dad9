//! Startup script replay.
//!
//! A startup script is a UTF-8 text file with one command per line. Blank lines
//! and lines starting with `#` are skipped; a line equal to `exit` (any case)
//! stops the replay early. Commands are not interpreted: each one is echoed as
//! input and acknowledged as output.

pub mod lines;
pub mod report;
pub mod runner;

pub use lines::{commands, ScriptCommand, ScriptCommands, EXIT_DIRECTIVE};
pub use report::{ConsoleSink, ReportSink, ScriptEvent};
pub use runner::{execute_startup_script, RunState, ScriptOutcome, ScriptRunner};
