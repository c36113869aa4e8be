//! Integration Tests: CLI Scenarios
//!
//! Drives the full load → check → report pipeline in-process against
//! temporary directories, asserting on exit codes and rendered output.

use std::fs;
use std::path::{Path, PathBuf};

use assert_matches::assert_matches;
use tempfile::TempDir;

use latcheck_cli::{execute, Cli, RunError, EXIT_FAILURE, EXIT_USAGE};
use latcheck_core::LoadError;

fn cli(dir: &Path, processes: u32, rounds: u32) -> Cli {
    Cli {
        processes,
        rounds,
        dir: dir.to_path_buf(),
        allow_empty: false,
        trim: false,
        verbose: false,
    }
}

fn write_output(dir: &TempDir, id: u32, contents: &str) {
    fs::write(dir.path().join(format!("{id}.output")), contents).unwrap();
}

#[test]
fn scenario_pass_two_nested_files() {
    let dir = TempDir::new().unwrap();
    write_output(&dir, 1, "1 2 3\n");
    write_output(&dir, 2, "1 2\n");

    let result = execute(&cli(dir.path(), 2, 1)).unwrap();
    assert!(result.passed());
    assert_eq!(result.exit_code(), 0);
    assert_eq!(
        result.render(),
        "OK: All 2 files are comparable on each of the first 1 lines.\n"
    );
}

#[test]
fn scenario_violation_with_both_differences() {
    let dir = TempDir::new().unwrap();
    write_output(&dir, 1, "1 2\n");
    write_output(&dir, 2, "2 3\n");

    let result = execute(&cli(dir.path(), 2, 1)).unwrap();
    assert_eq!(result.exit_code(), EXIT_FAILURE);
    assert_eq!(result.violations().len(), 1);

    let rendered = result.render();
    assert!(rendered.contains("FAIL: Found 1 comparability violation(s)."));
    assert!(rendered.contains("Violation 1: line 1 -> 1.output vs 2.output are incomparable"));
    assert!(rendered.contains("  1 \\ 2 = [1]"));
    assert!(rendered.contains("  2 \\ 1 = [3]"));
}

#[test]
fn scenario_insufficient_lines_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    write_output(&dir, 1, "1 2\n");

    let err = execute(&cli(dir.path(), 1, 2)).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_FAILURE);
    assert_matches!(
        err,
        RunError::Load(LoadError::InsufficientLines { ref file, actual: 1, required: 2 })
            if file == "1.output"
    );
}

#[test]
fn scenario_blank_line_without_allow_empty() {
    let dir = TempDir::new().unwrap();
    write_output(&dir, 1, "1 2\n\n");

    let err = execute(&cli(dir.path(), 1, 2)).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_FAILURE);
    assert_matches!(
        err,
        RunError::Load(LoadError::EmptyLineDisallowed { line_no: 2, .. })
    );
}

#[test]
fn blank_lines_pass_with_allow_empty() {
    let dir = TempDir::new().unwrap();
    write_output(&dir, 1, "1 2\n\n");
    write_output(&dir, 2, "1\n\n");

    let mut args = cli(dir.path(), 2, 2);
    args.allow_empty = true;
    let result = execute(&args).unwrap();
    assert!(result.passed());
}

#[test]
fn trailing_blanks_need_trim_to_be_ignored() {
    let dir = TempDir::new().unwrap();
    write_output(&dir, 1, "1 2\n\n\n");
    write_output(&dir, 2, "1\n");

    let err = execute(&cli(dir.path(), 2, 1)).unwrap_err();
    assert_matches!(err, RunError::Load(LoadError::EmptyLineDisallowed { .. }));

    let mut args = cli(dir.path(), 2, 1);
    args.trim = true;
    let result = execute(&args).unwrap();
    assert!(result.passed());
}

#[test]
fn missing_output_file_is_a_load_failure() {
    let dir = TempDir::new().unwrap();
    write_output(&dir, 1, "1\n");

    let err = execute(&cli(dir.path(), 2, 1)).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_FAILURE);
    assert_matches!(err, RunError::Load(LoadError::FileNotFound { .. }));
}

#[test]
fn non_directory_dir_is_a_usage_error() {
    let err = execute(&cli(&PathBuf::from("/definitely/not/here"), 1, 1)).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_USAGE);
    assert_matches!(err, RunError::NotADirectory(_));
}

#[test]
fn violations_across_rounds_and_pairs_are_exhaustive() {
    let dir = TempDir::new().unwrap();
    write_output(&dir, 1, "1 2\n1\n");
    write_output(&dir, 2, "2 3\n1 2\n");
    write_output(&dir, 3, "3 4\n2\n");

    let result = execute(&cli(dir.path(), 3, 2)).unwrap();
    let cells: Vec<(usize, u32, u32)> = result
        .violations()
        .iter()
        .map(|v| (v.round, v.first.0, v.second.0))
        .collect();
    assert_eq!(cells, vec![(1, 1, 2), (1, 1, 3), (1, 2, 3), (2, 1, 3)]);
}

#[test]
fn malformed_token_aborts_before_checking() {
    let dir = TempDir::new().unwrap();
    write_output(&dir, 1, "1 2\n");
    write_output(&dir, 2, "2 oops\n");

    let err = execute(&cli(dir.path(), 2, 1)).unwrap_err();
    assert_matches!(
        err,
        RunError::Load(LoadError::MalformedToken { ref line, .. }) if line == "2 oops"
    );
}
