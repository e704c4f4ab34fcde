// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod api;
mod cli;
mod config;
mod export;
mod loader;
mod table;
mod types;
mod ui;

use std::process;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        process::exit(1);
    }

    // Resolve everything the run needs upfront
    let plan = match config::build_run_plan(&args) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            process::exit(1);
        }
    };

    // Load every per-player stats file
    let records = match loader::load_stats_dir(&plan.stats_dir) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e);
            process::exit(1);
        }
    };

    if records.is_empty() {
        ui::status(&format!("no .json stats files in {}; writing a header-only sheet", plan.stats_dir.display()));
    }

    // Resolve column labels: Mojang names, or raw UUIDs offline.
    // Any single lookup failure aborts the run rather than mislabelling a column.
    let uuids: Vec<String> = records.iter().map(|r| r.uuid.clone()).collect();
    let names = if plan.offline {
        uuids
    } else {
        if !uuids.is_empty() {
            ui::status(&format!("resolving {} player names ({} at a time)", uuids.len(), plan.concurrency));
        }
        match api::resolve_names(&uuids, plan.concurrency) {
            Ok(n) => n,
            Err(e) => {
                ui::print_error(&format!("Name lookup failed: {}", e));
                process::exit(1);
            }
        }
    };

    // Aggregate: sorted key set, zero-filled matrix, labelled table
    let keys = table::collect_keys(&records);
    let matrix = table::build_matrix(&names, &records, &keys);
    let sheet = table::assemble(&names, &keys, &matrix);

    if let Err(e) = export::write_csv(&sheet, &plan.output) {
        ui::print_error(&e);
        process::exit(1);
    }

    println!("Wrote {} statistics for {} players to {}", keys.len(), names.len(), plan.output.display());
}
