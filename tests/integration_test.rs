//! Integration tests for the life-evaluator CLI
//!
//! These tests run the actual binary with scripted stdin to verify:
//! - All "yes" takes the success path without the closing reminder
//! - All "no" takes the growth path with truncated focus areas
//! - Invalid answers re-prompt without being counted
//! - End of input is fatal
//! - JSON output keeps stdout machine-readable
//!
//! Each test points the config at its own temp directory so a user's
//! config file cannot change the output.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

const QUESTION_COUNT: usize = 22;

/// Run the binary with `input` on stdin and return (stdout, stderr, exit_code)
fn run_with_input(args: &[&str], input: &str) -> (String, String, i32) {
    let config_dir = TempDir::new().expect("Failed to create temp dir");

    let mut child = Command::new(env!("CARGO_BIN_EXE_life-evaluator"))
        .args(args)
        .env("LIFE_EVALUATOR_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .env_remove("LIFE_EVALUATOR_PACING")
        .env_remove("LIFE_EVALUATOR_CHAR_DELAY_MS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute life-evaluator binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for binary");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.code().unwrap_or(-1))
}

/// Start gate line followed by one answer per question
fn answers(answer: &str) -> String {
    let mut input = String::from("\n");
    for _ in 0..QUESTION_COUNT {
        input.push_str(answer);
        input.push('\n');
    }
    input
}

#[test]
fn test_all_yes_succeeds() {
    let (stdout, stderr, code) = run_with_input(&["--no-pacing", "--no-color"], &answers("y"));

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("LIFE SUCCESS EVALUATOR"));
    assert!(stdout.contains("SUCCESS ACHIEVED!"));
    assert!(stdout.contains("You scored: 24/24 (100.0%)"));
    assert!(!stdout.contains("REMEMBER"), "closing reminder is growth-only");
    assert!(!stdout.contains("Please enter Y or N"));
}

#[test]
fn test_all_no_lists_focus_areas() {
    let (stdout, stderr, code) = run_with_input(&["--no-pacing", "--no-color"], &answers("NO"));

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("ROOM FOR GROWTH"));
    assert!(stdout.contains("You scored: 0/24 (0.0%)"));
    assert!(stdout.contains("1. Do you feel physically healthy and energetic most days?"));
    assert!(stdout.contains("5. Do you have meaningful relationships with people who care about you?"));
    assert!(!stdout.contains("6. "));
    assert!(stdout.contains("... and 17 more areas"));
    assert!(stdout.contains("REMEMBER"));
}

#[test]
fn test_categories_asked_in_order() {
    let (stdout, _, code) = run_with_input(&["--no-pacing", "--no-emoji"], &answers(" Yes "));
    assert_eq!(code, 0);

    let headings = [
        "HEALTH & PHYSICAL WELLBEING",
        "RELATIONSHIPS & CONNECTION",
        "PURPOSE & PERSONAL GROWTH",
        "FINANCIAL WELLBEING",
        "HAPPINESS & FULFILLMENT",
        "CONTRIBUTION & IMPACT",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|h| stdout.find(h).unwrap_or_else(|| panic!("missing {}", h)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
}

#[test]
fn test_invalid_answers_reprompt() {
    let mut input = String::from("\nmaybe\nyess\n");
    input.push_str(&"n\n".repeat(QUESTION_COUNT));

    let (stdout, stderr, code) = run_with_input(&["--no-pacing"], &input);

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(stdout.matches("Please enter Y or N").count(), 2);
    assert!(stdout.contains("You scored: 0/24 (0.0%)"));
}

#[test]
fn test_end_of_input_fails() {
    let (stdout, stderr, code) = run_with_input(&["--no-pacing"], "\ny\ny\n");

    assert_ne!(code, 0);
    assert!(stderr.contains("Questionnaire ended before every question was answered"));
    assert!(stderr.contains("input closed"));
    assert!(!stdout.contains("You scored"));
}

#[test]
fn test_closed_before_start_fails() {
    let (_, stderr, code) = run_with_input(&["--no-pacing"], "");
    assert_ne!(code, 0);
    assert!(stderr.contains("Questionnaire was not started"));
}

#[test]
fn test_json_output() {
    // 17 "yes" answers cover both weighted questions: 19/24
    let mut input = String::from("\n");
    for i in 0..QUESTION_COUNT {
        input.push_str(if i < 17 { "y\n" } else { "n\n" });
    }

    let (stdout, stderr, code) = run_with_input(&["--format", "json", "--no-pacing"], &input);

    assert_eq!(code, 0, "stderr: {}", stderr);
    let value: serde_json::Value = serde_json::from_str(stdout.trim())
        .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, stdout));
    assert_eq!(value["score"], 19);
    assert_eq!(value["max_score"], 24);
    assert_eq!(value["percentage"], serde_json::json!(79.2));
    assert_eq!(value["verdict"], "success");
    assert_eq!(value["categories"].as_array().unwrap().len(), 6);
    assert_eq!(value["improvement_areas"].as_array().unwrap().len(), 5);

    // Interactive output went to stderr
    assert!(stderr.contains("LIFE SUCCESS EVALUATOR"));
}

#[test]
fn test_questions_command() {
    let (stdout, stderr, code) = run_with_input(&["questions"], "");

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("22 questions, 24 points possible, 70% needed to pass"));
    assert!(stdout.contains("Do you feel your life has meaning and purpose?"));
    assert!(stdout.contains("x2"));
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("life-evaluator").join("config.toml");
    let path_str = path.to_str().unwrap();

    let (stdout, _, code) = run_with_input(&["config", "init", "--config", path_str], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("Config written"));
    assert!(path.exists());

    std::fs::write(&path, "[display]\npacing = false\nemoji = false\n").unwrap();
    let (stdout, _, code) = run_with_input(&["config", "show", "--config", path_str], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("pacing:        false"));
    assert!(stdout.contains("emoji:         false"));
    assert!(stdout.contains("clear screen:  true"));
}
