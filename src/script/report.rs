//! Report events emitted while replaying a script, and where they go.

use crate::error::ScriptError;
use std::fmt;
use std::path::PathBuf;

/// Width of the separator printed around a script run.
pub const SEPARATOR_WIDTH: usize = 40;

/// One observable step of a script run, in emission order.
#[derive(Debug)]
pub enum ScriptEvent {
    /// Replay of `path` is about to start.
    Started { path: PathBuf },
    /// A command echoed as if typed by the user.
    Input { line: usize, command: String },
    /// Acknowledgment standing in for the command's output.
    Output { command: String },
    /// The exit directive was reached.
    ExitRequested,
    /// Every line was consumed.
    Completed,
    /// The script could not be run.
    Failed(ScriptError),
}

impl ScriptEvent {
    pub fn is_failure(&self) -> bool {
        matches!(self, ScriptEvent::Failed(_))
    }
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        match self {
            ScriptEvent::Started { path } => write!(
                f,
                "\nExecuting startup script: {}\n{}",
                path.display(),
                separator
            ),
            ScriptEvent::Input { command, .. } => write!(f, "[INPUT] {}", command),
            ScriptEvent::Output { command } => write!(f, "[OUTPUT] Executed command: {}", command),
            ScriptEvent::ExitRequested => write!(f, "[OUTPUT] Terminating on exit command"),
            ScriptEvent::Completed => write!(f, "{}\nScript completed successfully", separator),
            ScriptEvent::Failed(ScriptError::NotFound(path)) => {
                write!(f, "ERROR: script '{}' not found", path.display())
            }
            ScriptEvent::Failed(err @ ScriptError::Read { .. }) => {
                write!(f, "ERROR while executing script: {}", err)
            }
        }
    }
}

/// Destination for script events.
pub trait ReportSink {
    fn report(&mut self, event: ScriptEvent);
}

/// Collects events in memory.
impl ReportSink for Vec<ScriptEvent> {
    fn report(&mut self, event: ScriptEvent) {
        self.push(event);
    }
}

/// Prints each event on standard output.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn report(&mut self, event: ScriptEvent) {
        println!("{}", event);
    }
}
