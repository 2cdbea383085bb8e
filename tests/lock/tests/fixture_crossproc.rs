//! Cross-process determinism: the `solve_fixture` binary must print the same
//! lines under different working directories and environments, and those
//! lines must match an in-process run.

use std::path::Path;
use std::process::Command;

use gps_search::contract::Cost;
use gps_search::policy::Strategy;
use lock_tests::fixture::{fixture_lines, DEFAULT_MAX_DEPTH, DEFAULT_STRATEGY, DEFAULT_WORLD};

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("solve_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir).args(args);
    command
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn expected(world: &str, strategy: Strategy, max_depth: Cost) -> String {
    let mut text = fixture_lines(world, strategy, max_depth)
        .expect("in-process run succeeds")
        .join("\n");
    text.push('\n');
    text
}

#[test]
fn default_fixture_matches_in_process_run() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[], &[]);
    assert!(baseline.contains("outcome=solved"), "{baseline}");
    assert!(baseline.contains("report_digest=sha256:"), "{baseline}");
    assert_eq!(
        baseline,
        expected(DEFAULT_WORLD, DEFAULT_STRATEGY, DEFAULT_MAX_DEPTH)
    );
}

#[test]
fn fixture_output_is_independent_of_environment() {
    let root = workspace_root();
    let args = ["calcudoku:3x3", "iddfs", "6"];
    let baseline = run_variant(&root, &args, &[]);

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    assert_eq!(baseline, run_variant(alt_cwd, &args, &[]), "cwd changed");
    assert_eq!(
        baseline,
        run_variant(&root, &args, &[("LC_ALL", "C"), ("LANG", "C")]),
        "locale changed"
    );
    // Logging goes to stderr and must not leak into stdout.
    assert_eq!(
        baseline,
        run_variant(&root, &args, &[("RUST_LOG", "trace"), ("TZ", "America/New_York")]),
        "log level changed"
    );
    assert_eq!(baseline, expected("calcudoku:3x3", Strategy::Iddfs, 6));
}

#[test]
fn unknown_world_exits_with_failure() {
    let output = Command::new(binary_path())
        .arg("rubik:3x3")
        .output()
        .expect("spawn solve_fixture");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown world: rubik:3x3"));
}
