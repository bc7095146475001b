use std::process::{Command, Output};

fn run_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_optbind-demo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run optbind-demo")
}

fn run_demo_logged(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_optbind-demo"))
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .expect("failed to run optbind-demo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Successful parses
// ---------------------------------------------------------------------------

#[test]
fn prints_configuration_and_summary_tables() {
    let output = run_demo(&["-a", "1.5", "-b", "2.5", "-d", "hello"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Option & Argument Table"));
    assert!(out.contains("Input Summary"));
    assert!(out.contains("hello"));
    assert!(out.contains("100"));
}

#[test]
fn json_summary_reports_bound_values() {
    let output = run_demo(&[
        "-a", "1.5", "-b", "2.5", "-d", "hello", "-c", "0x10", "--format", "json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let mut views = serde_json::Deserializer::from_str(&out).into_iter::<serde_json::Value>();
    let configuration = views.next().unwrap().unwrap();
    let summary = views.next().unwrap().unwrap();

    assert_eq!(configuration["view"], "configuration");
    assert_eq!(configuration["options"][1]["value"], "NaN");
    assert_eq!(summary["view"], "summary");
    assert_eq!(summary["options"][1]["value"], "1.5");
    assert_eq!(summary["options"][3]["value"], "16");
    assert_eq!(summary["options"][4]["value"], "hello");
}

#[test]
fn unconvertible_numbers_are_reported_as_sentinels() {
    let output = run_demo(&["-a", "abc", "-b", "2.5", "-d", "x", "-c", "abc", "-f", "yaml"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("view: summary"));
    assert!(out.contains("NaN"));
    assert!(out.contains(&i32::MIN.to_string()));
}

#[test]
fn help_flag_prints_usage() {
    let output = run_demo(&["-h", "-a", "1", "-b", "2", "-d", "x"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("General Usage:"));
    assert!(!out.contains("Input Summary"));
}

// ---------------------------------------------------------------------------
// Errors exit non-zero with usage on stderr
// ---------------------------------------------------------------------------

#[test]
fn missing_required_option_exits_with_usage() {
    let output = run_demo(&["-a", "1.5", "-d", "hello"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error: missing required option in command line args: -b"));
    assert!(err.contains("General Usage:"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_argument_exits_non_zero() {
    let output = run_demo(&["-a", "-b", "2.5", "-d", "hello"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing argument for option: -a"));
}

#[test]
fn repeated_option_exits_non_zero() {
    let output = run_demo(&["-a", "1.5", "-a", "2.5", "-b", "2.5", "-d", "hello"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("option given more than once: -a"));
}

#[test]
fn unknown_option_exits_non_zero() {
    let output = run_demo(&["-z"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unrecognized option: z"));
}

#[test]
fn flag_given_a_value_exits_non_zero() {
    let output = run_demo(&["--help=yes", "-a", "1", "-b", "2", "-d", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unrecognized option: help"));
}

#[test]
fn parse_outcome_is_logged_to_stderr() {
    let output = run_demo_logged(&["-a", "1", "-b", "2", "-d", "x"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("Command line accepted"));
    assert!(!stdout(&output).contains("Command line accepted"));

    let output = run_demo_logged(&["-z"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Command line rejected"));
}

#[test]
fn unknown_format_is_rejected() {
    let output = run_demo(&["-a", "1", "-b", "2", "-d", "x", "-f", "xml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown output format 'xml'"));
}
