//! Tests for the CLI error types.

use super::*;

#[test]
fn test_prompt_error_display() {
    let error = Error::Prompt("stdin closed".to_string());
    assert_eq!(error.to_string(), "Failed to read input: stdin closed");
}

#[test]
fn test_workflow_error_is_transparent() {
    let inner = git_commander_core::Error::GitCommand {
        command: "git push --mirror origin".to_string(),
        status: "exit status: 1".to_string(),
        stderr: "rejected".to_string(),
    };
    let expected = inner.to_string();
    let error = Error::from(inner);
    assert_eq!(error.to_string(), expected);
}

#[test]
fn test_invalid_input_names_the_field() {
    let error = Error::from(git_commander_core::ValidationError::empty_field(
        "new_repo_name",
    ));
    assert!(error.to_string().contains("new_repo_name"));
}
