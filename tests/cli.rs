// End-to-end runs of the `try` binary against a throwaway base directory.
// stdin is null and stderr is piped, so the binary never prompts.

use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_try(base: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_try"))
        .args(args)
        .env("TRY_PATH", base)
        .env("NO_COLOR", "1")
        .env_remove("TRY_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

/// Path inside the `cd '...'` directive
fn emitted_path(output: &Output) -> String {
    let out = stdout(output);
    let line = out.trim_end();
    line.strip_prefix("cd '")
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or_else(|| panic!("unexpected directive: {:?}", line))
        .to_string()
}

#[test]
fn test_first_run_creates_folder() {
    let base = TempDir::new().unwrap();

    let output = run_try(base.path(), &["demo", "app"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).lines().count(), 1);

    let path = emitted_path(&output);
    assert!(path.starts_with(&*base.path().to_string_lossy()));
    assert!(path.ends_with("-demo app"));
    assert!(Path::new(&path).is_dir());
    assert!(base.path().join("try.db").exists());
}

#[test]
fn test_single_match_reuses_folder() {
    let base = TempDir::new().unwrap();

    let created = run_try(base.path(), &["rust-playground"]);
    let reused = run_try(base.path(), &["rpg"]);

    assert!(reused.status.success(), "stderr: {}", stderr(&reused));
    assert_eq!(emitted_path(&reused), emitted_path(&created));
    assert!(stderr(&reused).contains("✓ rust-playground"));
    assert!(stderr(&reused).contains("opened 2 times"));
}

#[test]
fn test_multiple_matches_fall_back_to_first() {
    let base = TempDir::new().unwrap();

    let alpha = run_try(base.path(), &["alpha"]);
    // "alpha" would match the existing folder, so force a second one
    let beta = run_try(base.path(), &["beta", "alpha"]);
    assert_ne!(emitted_path(&alpha), emitted_path(&beta));

    let output = run_try(base.path(), &["alp"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let err = stderr(&output);
    assert!(err.contains("Multiple matches found for 'alp'"));
    assert!(err.contains("Create new: alp"));
    assert!(err.contains("Using first match"));
    assert_eq!(stdout(&output).lines().count(), 1);
}

#[test]
fn test_init_prints_snippet_only() {
    let base = TempDir::new().unwrap();

    let output = run_try(base.path(), &["init", "fish"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("function try"));
    // init never touches the store
    assert!(!base.path().join("try.db").exists());

    let output = run_try(base.path(), &["init", "bash"]);
    assert!(stdout(&output).contains("try()"));
}

#[test]
fn test_unknown_shell_fails() {
    let base = TempDir::new().unwrap();

    let output = run_try(base.path(), &["init", "tcsh"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_no_arguments_is_an_error() {
    let base = TempDir::new().unwrap();

    let output = run_try(base.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("USAGE"));
}

#[test]
fn test_double_dash_allows_reserved_words() {
    let base = TempDir::new().unwrap();

    let output = run_try(base.path(), &["--", "init"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(emitted_path(&output).ends_with("-init"));
}

#[test]
fn test_failure_emits_nothing() {
    let base = TempDir::new().unwrap();
    // The base "directory" is a file, so nothing can be created under it
    let blocker = base.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let output = run_try(&blocker, &["demo"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).starts_with("error:"));
}
