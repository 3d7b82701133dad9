//! Script runner: replays a startup script as a simulated dialogue.
//!
//! The run is an explicit state machine:
//!
//! ```text
//! Reading ──(missing / unreadable)──> Failed
//!    │
//!    └──> ProcessingLine ──(exit)──> Exited
//!              │  ^
//!              └──┘ (next command)
//!              └──(no more lines)──> Completed
//! ```
//!
//! `Exited` and `Completed` are successful terminal states; `Failed` is the only
//! failing one.

use crate::error::ScriptError;
use crate::script::lines::{commands, ScriptCommands};
use crate::script::report::{ReportSink, ScriptEvent};
use std::cell::OnceCell;
use std::path::Path;
use tracing::{debug, info, warn};

/// Run state. `ProcessingLine` borrows the script text read in `Reading`.
#[derive(Debug)]
pub enum RunState<'a> {
    Reading,
    ProcessingLine(ScriptCommands<'a>),
    Exited,
    Failed(ScriptError),
    Completed,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// Stopped at the exit directive.
    Exited,
    /// Consumed every line.
    Completed,
    /// Missing or unreadable script.
    Failed,
}

impl ScriptOutcome {
    pub fn is_success(self) -> bool {
        !matches!(self, ScriptOutcome::Failed)
    }
}

/// Replays one script file. Holds no cursor between runs: running again starts
/// from the first line.
#[derive(Debug, Clone, Copy)]
pub struct ScriptRunner<'a> {
    path: &'a Path,
    prompt: &'a str,
}

impl<'a> ScriptRunner<'a> {
    /// `prompt` is the resolved user prompt; commands are not interpreted yet,
    /// so it is only carried into diagnostics.
    pub fn new(path: &'a Path, prompt: &'a str) -> Self {
        Self { path, prompt }
    }

    /// Run the script to a terminal state, reporting every step to `sink`.
    pub fn run<S: ReportSink + ?Sized>(&self, sink: &mut S) -> ScriptOutcome {
        debug!(script = %self.path.display(), prompt = self.prompt, "Startup script run starting");
        sink.report(ScriptEvent::Started {
            path: self.path.to_path_buf(),
        });

        let source = OnceCell::new();
        let mut state = RunState::Reading;
        loop {
            state = match state {
                RunState::Reading => match self.read_source() {
                    Ok(text) => RunState::ProcessingLine(commands(source.get_or_init(|| text))),
                    Err(err) => RunState::Failed(err),
                },
                RunState::ProcessingLine(mut remaining) => match remaining.next() {
                    Some(command) => {
                        debug!(line = command.line, command = command.text, "Replaying command");
                        sink.report(ScriptEvent::Input {
                            line: command.line,
                            command: command.text.to_string(),
                        });
                        sink.report(ScriptEvent::Output {
                            command: command.text.to_string(),
                        });
                        if command.is_exit() {
                            RunState::Exited
                        } else {
                            RunState::ProcessingLine(remaining)
                        }
                    }
                    None => RunState::Completed,
                },
                RunState::Exited => {
                    info!(script = %self.path.display(), "Startup script stopped at exit directive");
                    sink.report(ScriptEvent::ExitRequested);
                    return ScriptOutcome::Exited;
                }
                RunState::Completed => {
                    info!(script = %self.path.display(), "Startup script completed");
                    sink.report(ScriptEvent::Completed);
                    return ScriptOutcome::Completed;
                }
                RunState::Failed(err) => {
                    warn!(script = %self.path.display(), error = %err, "Startup script failed");
                    sink.report(ScriptEvent::Failed(err));
                    return ScriptOutcome::Failed;
                }
            };
        }
    }

    fn read_source(&self) -> Result<String, ScriptError> {
        if !self.path.exists() {
            return Err(ScriptError::NotFound(self.path.to_path_buf()));
        }
        std::fs::read_to_string(self.path).map_err(|source| ScriptError::Read {
            path: self.path.to_path_buf(),
            source,
        })
    }
}

/// Run the script at `path` and return whether it succeeded.
pub fn execute_startup_script<S: ReportSink + ?Sized>(
    path: &Path,
    prompt: &str,
    sink: &mut S,
) -> bool {
    ScriptRunner::new(path, prompt).run(sink).is_success()
}
