//! Configuration resolution module.
//!
//! This module turns validated CLI arguments into a `RunPlan`: every path
//! and limit the pipeline needs, resolved upfront so the rest of the run
//! works from an immutable plan.

use crate::cli::CliArgs;
use log::debug;
use std::path::PathBuf;

/// Fully resolved inputs for one sheet run.
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// Directory holding the per-player <uuid>.json files.
    pub stats_dir: PathBuf,

    /// Destination for the CSV spreadsheet.
    pub output: PathBuf,

    /// Label columns with raw UUIDs instead of resolved names.
    pub offline: bool,

    /// Maximum number of name lookups in flight at once (always >= 1).
    pub concurrency: usize,
}

/// Build a complete RunPlan from CLI arguments.
///
/// Checks the stats folder exists before any file or network work happens,
/// so a typo in the path fails immediately.
pub fn build_run_plan(args: &CliArgs) -> Result<RunPlan, String> {
    debug!("Building run plan from CLI args");

    if !args.stats_dir.exists() {
        return Err(format!("stats folder {} does not exist", args.stats_dir.display()));
    }
    if !args.stats_dir.is_dir() {
        return Err(format!("{} is not a directory", args.stats_dir.display()));
    }

    let plan = RunPlan {
        stats_dir: args.stats_dir.clone(),
        output: args.output.clone(),
        offline: args.offline,
        concurrency: args.concurrency.max(1),
    };

    debug!(
        "Run plan: stats_dir={:?} output={:?} offline={} concurrency={}",
        plan.stats_dir, plan.output, plan.offline, plan.concurrency
    );

    Ok(plan)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
