//! Integration tests for startup script replay

use super::test_utils::Workspace;
use shemu::error::ScriptError;
use shemu::script::{execute_startup_script, ScriptEvent, ScriptOutcome, ScriptRunner};

fn input_output_pairs(events: &[ScriptEvent]) -> Vec<(String, String)> {
    let inputs: Vec<String> = events
        .iter()
        .filter_map(|e| match e {
            ScriptEvent::Input { command, .. } => Some(command.clone()),
            _ => None,
        })
        .collect();
    let outputs: Vec<String> = events
        .iter()
        .filter_map(|e| match e {
            ScriptEvent::Output { command } => Some(command.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(inputs.len(), outputs.len(), "every input needs an output");
    inputs.into_iter().zip(outputs).collect()
}

#[test]
fn test_comment_and_blank_only_script() {
    let ws = Workspace::new();
    let path = ws.write("boot.sh", "# only comments\n\n\t\n   # and blanks\n");
    let mut events: Vec<ScriptEvent> = Vec::new();

    assert!(execute_startup_script(&path, "> ", &mut events));
    assert!(input_output_pairs(&events).is_empty());
    assert!(matches!(events.last(), Some(ScriptEvent::Completed)));
}

#[test]
fn test_exit_stops_before_later_lines() {
    let ws = Workspace::new();
    let path = ws.write("boot.sh", "echo hi\nexit\necho unreachable\n");
    let mut events: Vec<ScriptEvent> = Vec::new();

    assert!(execute_startup_script(&path, "> ", &mut events));

    let pairs = input_output_pairs(&events);
    assert_eq!(
        pairs,
        vec![
            ("echo hi".to_string(), "echo hi".to_string()),
            ("exit".to_string(), "exit".to_string()),
        ]
    );
    assert!(events
        .iter()
        .all(|e| !e.to_string().contains("echo unreachable")));
    assert!(matches!(events.last(), Some(ScriptEvent::ExitRequested)));
}

#[test]
fn test_exit_with_arguments_is_an_ordinary_command() {
    let ws = Workspace::new();
    let path = ws.write("boot.sh", "EXIT extra text\nls\n");
    let mut events: Vec<ScriptEvent> = Vec::new();

    let outcome = ScriptRunner::new(&path, "> ").run(&mut events);

    assert_eq!(outcome, ScriptOutcome::Completed);
    assert_eq!(input_output_pairs(&events).len(), 2);
}

#[test]
fn test_missing_script_reports_one_failure() {
    let ws = Workspace::new();
    let path = ws.missing("absent.sh");
    let mut events: Vec<ScriptEvent> = Vec::new();

    assert!(!execute_startup_script(&path, "> ", &mut events));
    assert!(input_output_pairs(&events).is_empty());

    let failures: Vec<&ScriptEvent> = events.iter().filter(|e| e.is_failure()).collect();
    assert_eq!(failures.len(), 1);
    assert!(matches!(
        failures[0],
        ScriptEvent::Failed(ScriptError::NotFound(_))
    ));
}

#[test]
fn test_commands_are_reported_in_file_order() {
    let ws = Workspace::new();
    let path = ws.write("boot.sh", "  pwd  \n# skip\ncd /tmp\n\nls -la\n");
    let mut events: Vec<ScriptEvent> = Vec::new();

    ScriptRunner::new(&path, "$ ").run(&mut events);

    let lines: Vec<usize> = events
        .iter()
        .filter_map(|e| match e {
            ScriptEvent::Input { line, .. } => Some(*line),
            _ => None,
        })
        .collect();
    assert_eq!(lines, vec![1, 3, 5]);

    let commands: Vec<String> = input_output_pairs(&events).into_iter().map(|(i, _)| i).collect();
    assert_eq!(commands, vec!["pwd", "cd /tmp", "ls -la"]);
}
