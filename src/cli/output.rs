//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::cli::presentation::FAILURE_MESSAGE;
use crate::error::ShellError;

/// Map domain errors to the text printed before the process exits.
pub fn map_error(e: &ShellError) -> String {
    match e {
        ShellError::StartupScriptFailed(_) => FAILURE_MESSAGE.to_string(),
        other => other.to_string(),
    }
}
