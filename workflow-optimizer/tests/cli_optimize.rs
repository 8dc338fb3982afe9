//! CLI tests for the `workflow-optimizer` binary.
//!
//! Spawns the binary inside a temp repository root and verifies stdout, exit
//! codes, and the rewritten workflow bytes.

use std::fs;
use std::process::Command;

use workflow_optimizer::exit_codes;
use workflow_optimizer::test_support::{TestWorkspace, legacy_workflow, optimized_workflow};

const TARGET: &str = ".github/workflows/04-configure-environment.yml";

#[test]
fn updates_default_target_and_prints_summary() {
    let ws = TestWorkspace::with_default_target(&legacy_workflow("name: Configure\n", "\n"))
        .expect("workspace");

    let output = Command::new(env!("CARGO_BIN_EXE_workflow-optimizer"))
        .current_dir(ws.root())
        .output()
        .expect("run workflow-optimizer");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(
        stdout,
        format!("Optimizing {TARGET}...\n✅ Updated {TARGET}\n\n✅ Optimized 1 files:\n  - {TARGET}\n")
    );
    assert_eq!(
        ws.read_default_target().expect("read"),
        optimized_workflow("name: Configure\n", "\n")
    );
}

#[test]
fn second_run_reports_no_changes() {
    let ws = TestWorkspace::with_default_target(&legacy_workflow("", "")).expect("workspace");
    let bin = env!("CARGO_BIN_EXE_workflow-optimizer");

    let first = Command::new(bin)
        .current_dir(ws.root())
        .output()
        .expect("first run");
    assert_eq!(first.status.code(), Some(exit_codes::OK));
    let after_first = fs::read(ws.default_target_path()).expect("read");

    let second = Command::new(bin)
        .current_dir(ws.root())
        .output()
        .expect("second run");
    assert_eq!(second.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(second.stdout).expect("utf8 stdout");
    assert!(stdout.ends_with("\nℹ️ No files needed optimization\n"));
    assert_eq!(fs::read(ws.default_target_path()).expect("read"), after_first);
}

#[test]
fn missing_target_fails_without_summary() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = Command::new(env!("CARGO_BIN_EXE_workflow-optimizer"))
        .current_dir(temp.path())
        .output()
        .expect("run workflow-optimizer");

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(stdout, format!("Optimizing {TARGET}...\n"));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("04-configure-environment.yml"));
    assert!(!temp.path().join(TARGET).exists());
}
