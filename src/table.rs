//! Sheet assembly - the aggregation core.
//!
//! This module handles:
//! - Collecting the distinct `category:statistic` keys across all players
//! - Filling the dense, zero-defaulted value matrix
//! - Assembling the final labelled table for CSV output
//!
//! Everything here is a pure transform over in-memory records: no I/O, no
//! blocking, no shared state. Inputs arrive fully materialized and are
//! never mutated.

use crate::types::PlayerRecord;
use std::collections::{BTreeSet, HashMap};

/// Separator joining a category and a statistic into one row key.
///
/// A category or statistic name that itself contains `:` would produce an
/// ambiguous key. Vanilla names carry the separator only in their uniform
/// `minecraft:` namespace prefix, so the join is left unescaped.
pub const KEY_SEPARATOR: char = ':';

/// Join a category and a statistic into the row key used across the sheet.
pub fn composite_key(category: &str, statistic: &str) -> String {
    format!("{}{}{}", category, KEY_SEPARATOR, statistic)
}

/// Collect the sorted, deduplicated set of composite keys across all players.
///
/// Row order in the final sheet derives entirely from this ordering
/// (ascending byte order), so it is established once, before the matrix is
/// filled, and never recomputed.
pub fn collect_keys(records: &[PlayerRecord]) -> Vec<String> {
    let mut keys = BTreeSet::new();

    for record in records {
        for (category, stats) in &record.stats {
            for statistic in stats.keys() {
                keys.insert(composite_key(category, statistic));
            }
        }
    }

    keys.into_iter().collect()
}

/// Fill the dense `keys x players` value matrix, defaulting absent cells to 0.
///
/// `names` and `records` must be positionally aligned, and `keys` must be
/// the key set collected from these same records. Either mismatch is a bug
/// in the caller, not a user-facing condition, and panics.
pub fn build_matrix(names: &[String], records: &[PlayerRecord], keys: &[String]) -> Vec<Vec<i64>> {
    assert_eq!(
        names.len(),
        records.len(),
        "player names and stats records must be positionally aligned"
    );

    // Precomputed row lookup keeps the fill at O(total stat entries)
    let key_index: HashMap<&str, usize> =
        keys.iter().enumerate().map(|(idx, key)| (key.as_str(), idx)).collect();

    let mut matrix = vec![vec![0i64; records.len()]; keys.len()];

    for (player_idx, record) in records.iter().enumerate() {
        for (category, stats) in &record.stats {
            for (statistic, value) in stats {
                let key = composite_key(category, statistic);
                let row = key_index[key.as_str()];
                matrix[row][player_idx] = *value;
            }
        }
    }

    matrix
}

/// Assemble the final table: a header row of player names, then one
/// labelled row per key.
///
/// The header leads with a blank cell so the name columns line up over the
/// value columns; every data row leads with its key. Player order is the
/// load order, never re-sorted.
pub fn assemble(names: &[String], keys: &[String], matrix: &[Vec<i64>]) -> Vec<Vec<String>> {
    let mut table = Vec::with_capacity(keys.len() + 1);

    let mut header = Vec::with_capacity(names.len() + 1);
    header.push(String::new());
    header.extend(names.iter().cloned());
    table.push(header);

    for (key, row) in keys.iter().zip(matrix) {
        let mut cells = Vec::with_capacity(row.len() + 1);
        cells.push(key.clone());
        cells.extend(row.iter().map(|value| value.to_string()));
        table.push(cells);
    }

    table
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
