//! Tests for run-plan resolution.

use super::*;
use crate::cli::CliArgs;
use std::path::PathBuf;
use tempfile::TempDir;

fn args_for(dir: PathBuf) -> CliArgs {
    CliArgs {
        stats_dir: dir,
        output: PathBuf::from("stats.csv"),
        offline: false,
        concurrency: 8,
    }
}

#[test]
fn test_plan_for_existing_dir_succeeds() {
    let dir = TempDir::new().unwrap();
    let plan = build_run_plan(&args_for(dir.path().to_path_buf())).unwrap();

    assert_eq!(plan.stats_dir, dir.path());
    assert_eq!(plan.output, PathBuf::from("stats.csv"));
    assert!(!plan.offline);
    assert_eq!(plan.concurrency, 8);
}

#[test]
fn test_plan_for_missing_dir_fails() {
    let err = build_run_plan(&args_for(PathBuf::from("/no/such/stats/folder"))).unwrap_err();
    assert!(err.contains("does not exist"), "unexpected error: {}", err);
}

#[test]
fn test_plan_for_file_path_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("not-a-dir.json");
    std::fs::write(&file, "{}").unwrap();

    let err = build_run_plan(&args_for(file)).unwrap_err();
    assert!(err.contains("not a directory"), "unexpected error: {}", err);
}

#[test]
fn test_plan_clamps_concurrency_to_one() {
    let dir = TempDir::new().unwrap();
    let mut args = args_for(dir.path().to_path_buf());
    args.concurrency = 0;

    // validate() rejects 0 upstream, but the plan never trusts that
    let plan = build_run_plan(&args).unwrap();
    assert_eq!(plan.concurrency, 1);
}

#[test]
fn test_plan_preserves_offline_flag() {
    let dir = TempDir::new().unwrap();
    let mut args = args_for(dir.path().to_path_buf());
    args.offline = true;

    let plan = build_run_plan(&args).unwrap();
    assert!(plan.offline);
}
